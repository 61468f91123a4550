/// Print the flat field mapping for each command-line argument as JSON
///
/// cargo run --example interpret --features serde -- 'http:\\a@b@host/x'
use serde_json::{Value, json};

fn main() {
    for input in std::env::args().skip(1) {
        let output = match uri_interpret::parse(&input) {
            Ok(uri) => {
                let mut fields = serde_json::to_value(&uri).expect("Failed to serialize URI");
                if let Value::Object(map) = &mut fields {
                    map.insert("normalized".to_string(), Value::String(uri.to_string()));
                }
                json!({ "input": input, "result": fields })
            }
            Err(err) => json!({ "input": input, "error": err.to_string() }),
        };

        println!(
            "{}",
            serde_json::to_string_pretty(&output).expect("Failed to format JSON")
        );
    }
}
