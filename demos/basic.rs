use uri_interpret::UriComponents;

fn main() {
    // Parse an ambiguous URI
    let uri = UriComponents::parse("HTTP:\\\\trusted.com@Evil.COM.:80/a/./b/../admin?x=1#top")
        .expect("Failed to parse URI");

    println!("Normalized: {uri}"); // http://trusted.com@evil.com/a/admin?x=1#top
    println!("Scheme: {}", uri.scheme()); // http
    println!("Username: {}", uri.username()); // trusted.com
    println!("Host: {}", uri.host()); // evil.com
    println!("Port: {:?}", uri.port()); // "" (default port elided)
    println!("Path: {}", uri.path()); // /a/admin
    println!("Query: {}", uri.query()); // x=1
    println!("Fragment: {}", uri.fragment()); // top
    println!();

    // Opaque schemes keep everything after the colon
    let mail = UriComponents::parse("MAILTO:someone@example.com").expect("Failed to parse URI");
    println!("Opaque: {}", mail.opaque()); // someone@example.com
    println!("Normalized: {mail}"); // mailto:someone@example.com
    println!();

    // Failures carry a fixed reason
    match UriComponents::parse("://nohost") {
        Ok(uri) => println!("Unexpected: {uri}"),
        Err(err) => println!("Error: {err}"), // missing or invalid scheme
    }
}
