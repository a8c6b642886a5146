use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use signup::graphql::{GRAPHQL_PATH, build_schema, serve};
use signup::users::MemoryUsersService;

async fn spawn_server(playground: bool) -> std::net::SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let schema = build_schema(Arc::new(MemoryUsersService::default()));
    tokio::spawn(async move {
        let _ = serve(listener, schema, playground).await;
    });
    addr
}

/// Sends one HTTP/1.1 request and returns the raw response text.
async fn send(addr: std::net::SocketAddr, method: &str, path: &str, body: &str) -> String {
    let mut stream = TcpStream::connect(addr).await.unwrap();
    let request = format!(
        "{method} {path} HTTP/1.1\r\nHost: {addr}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    stream.write_all(request.as_bytes()).await.unwrap();

    let mut response = Vec::new();
    stream.read_to_end(&mut response).await.unwrap();
    String::from_utf8_lossy(&response).into_owned()
}

#[tokio::test]
async fn test_post_register_over_http() {
    let addr = spawn_server(false).await;

    let body = serde_json::json!({
        "query": "mutation { register(registerDto: { name: \"John Doe\", email: \"john@example.com\", password: \"password123\", phone_number: 1234567890 }) { activation_token error { code } } }"
    })
    .to_string();
    let response = send(addr, "POST", GRAPHQL_PATH, &body).await;

    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.contains("\"activation_token\":\""));
    assert!(response.contains("\"error\":null"));
}

#[tokio::test]
async fn test_graphiql_served_when_enabled() {
    let addr = spawn_server(true).await;

    let response = send(addr, "GET", "/", "").await;
    assert!(response.starts_with("HTTP/1.1 200"), "{response}");
    assert!(response.to_lowercase().contains("graphiql"));
}

#[tokio::test]
async fn test_graphiql_absent_when_disabled() {
    let addr = spawn_server(false).await;

    let response = send(addr, "GET", "/", "").await;
    assert!(response.starts_with("HTTP/1.1 404"), "{response}");

    let response = send(addr, "GET", GRAPHQL_PATH, "").await;
    assert!(response.starts_with("HTTP/1.1 405"), "{response}");
}
