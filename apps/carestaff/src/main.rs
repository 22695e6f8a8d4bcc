//! # CareStaff Entry Point
//!
//! Boots a session from configuration and prints its JSON report.
//! The actual setup is in lib.rs so it can be tested.

fn main() {
    if let Err(e) = carestaff_app::run() {
        eprintln!("carestaff: {e}");
        std::process::exit(1);
    }
}
