/*!
simple_usage.rs

Example demonstrating:
- the built-in dictionary embedded by `include_wordlist!`
- a dictionary built at runtime from a newline-separated word list

Run with:
    RUST_LOG=trace cargo run --example simple_usage
*/

use cobalt::{include_wordlist, Dictionary, LoadOptions, Token};

fn print_encoding(title: &str, dict: &Dictionary, sentence: &str) {
    let encoded = match dict.encode(sentence) {
        Ok(encoded) => encoded,
        Err(e) => {
            println!("-- {} failed: {} --", title, e);
            return;
        }
    };
    println!(
        "-- {} ({} tokens, {} literal) --",
        title,
        encoded.tokens().len(),
        encoded.literal_count()
    );
    for token in encoded.tokens() {
        match token {
            Token::Word(ordinal) => {
                let word = dict.word(usize::from(*ordinal)).unwrap_or_default();
                println!("  word    {:>5}  {}", ordinal, String::from_utf8_lossy(word));
            }
            Token::Literal(bytes) => {
                println!("  literal        {}", String::from_utf8_lossy(bytes));
            }
        }
    }
    match encoded.to_codes() {
        Ok(codes) => println!(
            "  {} bytes of text -> {} codes ({} bytes)",
            sentence.len(),
            codes.len(),
            codes.len() * 2
        ),
        Err(e) => println!("  serialization failed: {}", e),
    }
}

fn example_compile_time() {
    // The path is evaluated relative to the crate root at compile time.
    let dict = include_wordlist!("data/words.txt");

    println!("=== Compile-time word table ({} words) ===", dict.len());
    print_encoding(
        "All known words",
        dict,
        "the children thought the story was beautiful",
    );
    print_encoding(
        "With unknown words",
        dict,
        "the aardvark ate every termite near the river",
    );
}

fn example_runtime_build() {
    println!("\n=== Runtime-built word table ===");

    let list = "# tiny list\nMoon\nsun\nstar\nsky\nthe\nshines\n";
    let options = LoadOptions {
        lowercase: true,
        sort: true,
    };
    let dict = match Dictionary::from_reader(list.as_bytes(), &options) {
        Ok(dict) => dict,
        Err(e) => {
            println!("failed to build dictionary: {}", e);
            return;
        }
    };

    print_encoding("Runtime table", &dict, "the moon shines and the sun shines");
}

fn main() {
    env_logger::init();

    println!("cobalt example: compile-time macro and runtime builder\n");

    example_compile_time();
    example_runtime_build();

    println!("\nDone.");
}
