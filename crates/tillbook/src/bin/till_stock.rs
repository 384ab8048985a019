//! till-stock - Print the stock status report.

fn main() -> std::process::ExitCode {
    tillbook::cmd::stock::main()
}
