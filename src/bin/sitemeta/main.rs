use clap::Parser;

mod args;
mod debug;
mod init;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = args::Cli::parse();

    cli.color.write_global();
    let colored_stderr = !matches!(
        anstream::AutoStream::choice(&std::io::stderr()),
        anstream::ColorChoice::Never
    );
    args::init_logging(&cli.verbose, colored_stderr);

    cli.command.run().map_err(|e| {
        proc_exit::Exit::new(proc_exit::Code::FAILURE).with_message(format!("{e:?}"))
    })?;

    Ok(())
}
