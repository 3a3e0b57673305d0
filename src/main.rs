use book_catalog::application::service::CatalogService;
use book_catalog::config::Config;
use book_catalog::infra::json_store::JsonCatalogRepository;
use book_catalog::interface::shell::{self, Styles};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    let config = Config::from_env();

    // logs go to stderr so they never interleave with the menu
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let repo = JsonCatalogRepository::new(&config.catalog_path);
    let (mut service, report) = CatalogService::open(repo);

    let stdin = std::io::stdin();
    shell::run(
        &mut service,
        &report,
        stdin.lock(),
        std::io::stdout(),
        Styles::detect(),
    )
}
