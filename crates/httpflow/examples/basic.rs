//! Basic example demonstrating a GET and a POST through the fluent builder

use httpflow::RequestBuilder;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Plain GET; the method defaults to GET
    let response = RequestBuilder::new()
        .url("https://jsonplaceholder.typicode.com/posts/1")
        .send()?;

    println!("GET example:");
    println!("Status: {}", response.status());
    println!("Body: {}", response.body());

    // POST with a JSON body
    let response = RequestBuilder::new()
        .url("https://jsonplaceholder.typicode.com/posts")
        .post()
        .json()
        .body(r#"{"title":"foo","body":"bar","userId":1}"#)
        .send()?;

    println!("\nPOST example:");
    println!("Status: {}", response.status());
    println!("Body: {}", response.body());

    Ok(())
}
