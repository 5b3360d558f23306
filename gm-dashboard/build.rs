use std::env;
use std::fs;
use std::path::Path;

const REQUIRED_COLUMNS: [&str; 7] = [
    "country",
    "continent",
    "year",
    "gdpPercap",
    "lifeExp",
    "pop",
    "iso_alpha",
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();
    let dest = Path::new(&out_dir).join("gapminder.csv");

    // Copy gapminder.csv to OUT_DIR for include_str
    let src = Path::new("../fixtures/gapminder.csv");
    if src.exists() {
        fs::copy(src, &dest).unwrap();
        warn_on_missing_columns(src);
    } else {
        fs::write(
            &dest,
            "country,continent,year,lifeExp,pop,gdpPercap,iso_alpha\n\
             Afghanistan,Asia,1952,28.801,8425333,779.4453145,AFG\n\
             Afghanistan,Asia,1957,30.332,9240934,820.8530296,AFG\n",
        )
        .unwrap();
    }

    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=../fixtures/gapminder.csv");
}

/// The app reports schema errors at runtime; flag them at build time too.
fn warn_on_missing_columns(path: &Path) {
    let mut rdr = match csv::ReaderBuilder::new().has_headers(true).from_path(path) {
        Ok(rdr) => rdr,
        Err(e) => {
            println!("cargo:warning=could not read {}: {}", path.display(), e);
            return;
        }
    };
    let headers: Vec<String> = match rdr.headers() {
        Ok(h) => h.iter().map(|s| s.trim().to_string()).collect(),
        Err(e) => {
            println!("cargo:warning=could not read headers of {}: {}", path.display(), e);
            return;
        }
    };
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            println!("cargo:warning=gapminder.csv is missing column '{}'", column);
        }
    }
}
