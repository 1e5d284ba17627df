#![allow(clippy::let_and_return)]

#[macro_use]
extern crate log;

mod app;
mod library;

#[cfg(test)]
mod test;

fn main() {
    let return_code = app::run_app();
    std::process::exit(return_code)
}
