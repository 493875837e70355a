use anyhow::{anyhow, Result};
use clap::{App, Arg};
use sitemeta::config::SiteProfile;
use sitemeta::content::{Collection, ContentRecord};
use sitemeta::page;
use std::fs::File;
use std::path::Path;

fn main() -> Result<()> {
    let matches = App::new("sitemeta")
        .about("Prints the synthesized SEO metadata and JSON-LD for one content record")
        .arg(
            Arg::with_name("site")
                .long("site")
                .takes_value(true)
                .default_value("site.yaml")
                .help("Site profile YAML file"),
        )
        .arg(
            Arg::with_name("records")
                .long("records")
                .takes_value(true)
                .required(true)
                .help("YAML file holding one collection's content records"),
        )
        .arg(
            Arg::with_name("collection")
                .long("collection")
                .takes_value(true)
                .possible_values(&["blog", "work"])
                .default_value("blog"),
        )
        .arg(
            Arg::with_name("slug")
                .required(true)
                .help("Slug to resolve within the collection"),
        )
        .get_matches();

    let profile = SiteProfile::from_file(Path::new(matches.value_of("site").unwrap()))?;

    let records_path = matches.value_of("records").unwrap();
    let records_file = match File::open(records_path) {
        Ok(file) => file,
        Err(e) => return Err(anyhow!("Opening records file `{}`: {}", records_path, e)),
    };
    let records: Vec<ContentRecord> = serde_yaml::from_reader(records_file)?;

    let kind = match matches.value_of("collection").unwrap() {
        "work" => Collection::Work,
        _ => Collection::Blog,
    };

    let metadata = page::resolve(&records, matches.value_of("slug").unwrap(), kind, &profile)?;
    println!("{}", serde_json::to_string_pretty(&metadata)?);
    Ok(())
}
