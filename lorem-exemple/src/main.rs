use lorem_core::Lorem;
use log::info;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // The seed can be passed as the first argument, the same seed always
    // prints the same text
    let seed: u64 = match std::env::args().nth(1) {
        Some(arg) => arg.parse()?,
        None => 42,
    };
    info!("Generating with seed {seed}");

    // Embedded latin corpus with a deterministic random source
    let lorem = Lorem::seeded(seed);

    // 20 printable ASCII characters
    println!("Characters: {}", lorem.characters(20)?);

    // Words are drawn with replacement, duplicates are possible
    println!("Words: {}", lorem.words(6)?.join(" "));

    // At least 4 words (up to 9), capitalised and ending with a period
    println!("Sentence: {}", lorem.default_sentence());

    for (i, sentence) in lorem.sentences(3)?.iter().enumerate() {
        println!("Sentence {}: {}", i + 1, sentence);
    }

    // At least 3 sentences (up to 5)
    println!("Paragraph: {}", lorem.default_paragraph());

    for (i, paragraph) in lorem.paragraphs(2)?.iter().enumerate() {
        println!("Paragraph {}: {}", i + 1, paragraph);
    }

    // 0 means 'pick a random count', titles and tags never fail
    println!("Title: {}", lorem.content_title(0));
    println!("Title (5 words): {}", lorem.content_title(5));
    println!("Tags: {}", lorem.content_tags(0));

    // Every other operation rejects a non-positive count
    match lorem.paragraphs(0) {
        Ok(_) => println!("Should not happen"),
        Err(e) => println!("Paragraphs(0) is invalid: {e}"),
    }

    Ok(())
}
