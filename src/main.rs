use hole_heat::cli_args::Args;
use std::process::ExitCode;

fn run(args: &Args) -> hole_heat::Result<()> {
    let mut model = args.build_model()?;
    let mut sink = args.build_sink()?;
    model.time_integrate(args.total_time, sink.as_mut())?;
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::cli_setup("hole_heat");

    #[cfg(feature = "profile-with-puffin")]
    let _server = {
        let server_addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        log::info!(
            "Run this to view profiling data:  puffin_viewer {server_addr}"
        );
        profiling::puffin::set_scopes_on(true);
        puffin_http::Server::new(&server_addr)
            .map_err(|e| log::warn!("Profiling server unavailable: {e}"))
            .ok()
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
