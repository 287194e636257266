mod common;

mod roster;
mod service;
mod validation;
