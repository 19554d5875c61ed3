//! Simulation run specs
//!
//! Verify a full day runs to completion and the transcript and summary
//! come out on stdout.

use crate::prelude::*;

#[test]
fn run_ends_with_the_closing_line_and_summary() {
    lobby()
        .args(&["--tellers", "2", "--customers", "3", "--seed", "1"])
        .passes()
        .stdout_has("The bank closes for the day.")
        .stdout_has("Served 3 customers.")
        .stdout_has("Peak occupancy:");
}

#[test]
fn transcript_names_every_customer() {
    lobby()
        .args(&["--tellers", "1", "--customers", "2", "--seed", "3"])
        .passes()
        .stdout_has("Customer 0")
        .stdout_has("Customer 1")
        .stdout_has("Teller 0");
}

#[test]
fn zero_customers_still_opens_and_closes() {
    lobby()
        .args(&["--customers", "0"])
        .passes()
        .stdout_has("ready to serve")
        .stdout_has("leaving for the day")
        .stdout_has("Served 0 customers.");
}

#[test]
fn quiet_run_prints_only_the_summary() {
    lobby()
        .args(&["--tellers", "2", "--customers", "3", "--seed", "1", "--quiet"])
        .passes()
        .stdout_has("Served 3 customers.")
        .stdout_lacks("wants to perform")
        .stdout_lacks("The bank closes for the day.");
}

#[test]
fn help_documents_the_flags() {
    lobby()
        .args(&["--help"])
        .passes()
        .stdout_has("--tellers")
        .stdout_has("--customers")
        .stdout_has("--seed")
        .stdout_has("--quiet");
}
