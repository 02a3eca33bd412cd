mod common;
mod seed;
