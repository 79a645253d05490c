use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use urlkit::core::decode;
use urlkit::{HostSplitter, SuffixTable, Url};

/// Parse, split and resolve URLs.
#[derive(Parser)]
#[command(name = "urlkit", version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a URL and print its normalized components
    Parse {
        url: String,
        /// Require an absolute URL
        #[arg(short, long)]
        absolute: bool,
    },
    /// Split a host into subdomain, domain and public suffix
    Split { host: String },
    /// Print the longest public suffix of a host
    Suffix { host: String },
    /// Resolve a reference against a base URL
    Resolve { reference: String, base: String },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Parse { url, absolute } => {
            let parsed = if absolute {
                Url::parse_absolute(&url)
            } else {
                Url::parse(&url)
            };
            let parsed = parsed.with_context(|| format!("invalid URL: {url}"))?;
            print_url(&parsed);
        }
        Command::Split { host } => {
            let table = SuffixTable::global();
            let (subdomain, domain) = HostSplitter::new(table).split(&host);
            println!("subdomain: {}", subdomain.as_deref().unwrap_or("-"));
            match domain {
                Some(domain) => {
                    println!("domain:    {domain}");
                    println!("label:     {}", domain.label());
                    println!("suffix:    {}", domain.suffix());
                }
                None => println!("domain:    -"),
            }
        }
        Command::Suffix { host } => {
            let suffix = SuffixTable::global()
                .lookup_suffix(&host)
                .with_context(|| format!("no public suffix for host: {host}"))?;
            println!("{suffix}");
        }
        Command::Resolve { reference, base } => {
            let base = Url::parse_absolute(&base).with_context(|| format!("invalid base URL: {base}"))?;
            let resolved = base
                .resolve(&reference)
                .with_context(|| format!("cannot resolve reference: {reference}"))?;
            println!("{resolved}");
        }
    }

    Ok(())
}

fn print_url(url: &Url<'_>) {
    let field = |value: Option<&str>| value.unwrap_or("-").to_string();

    println!("url:       {url}");
    println!("scheme:    {}", field(url.scheme()));
    println!("user:      {}", field(url.user()));
    println!("password:  {}", field(url.password()));
    println!("host:      {}", field(url.host()));
    println!("subdomain: {}", field(url.subdomain()));
    println!("domain:    {}", url.domain().map_or("-".to_string(), |d| d.to_string()));
    println!("suffix:    {}", field(url.domain_suffix()));
    println!("port:      {}", url.port_or_default().map_or("-".to_string(), |p| p.to_string()));
    println!("path:      {}", url.path());
    println!("decoded:   {}", decode(url.path()));
    println!("query:     {}", field(url.query()));
    println!("fragment:  {}", field(url.fragment()));
}
