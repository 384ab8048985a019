//! till-ledger - Print a counterparty ledger statement.

fn main() -> std::process::ExitCode {
    tillbook::cmd::ledger::main()
}
