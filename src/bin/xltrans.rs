fn main() {
    if let Err(err) =
        xltrans::init_tracing().and_then(|_| xltrans::batch::run(std::env::args_os()))
    {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
