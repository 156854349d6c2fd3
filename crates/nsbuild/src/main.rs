use std::process::ExitCode;

fn main() -> ExitCode {
    nsbuild_lib::main()
}
