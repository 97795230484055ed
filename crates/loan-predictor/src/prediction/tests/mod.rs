mod breakdown;
mod common;
mod intake;
