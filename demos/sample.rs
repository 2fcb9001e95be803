use bplus_index::{Error, StringIndex};

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_target(false)
        .init();

    let mut index = StringIndex::new();
    for key in ["h", "i", "j", "k", "l", "m", "a", "b", "c", "d", "e", "f", "g"] {
        index.insert(key.to_owned(), format!("THIS IS DATA {}", key.to_uppercase()));
    }

    println!("{}", index.render_search_path("g"));
    println!("{}", index.lookup("g")?);
    print!("{}", index.shape());

    Ok(())
}
