use rest_executor::{
    Method, Outcome, RequestError, RequestExecutor, RequestListener, RequestSpec,
};
use serde_json::json;
use tokio::task::LocalSet;

struct PrintListener;

impl RequestListener for PrintListener {
    fn on_pre_execute(&mut self) {
        println!("request started");
    }

    fn on_success(&mut self, body: String) {
        println!("ok: {body}");
    }

    fn on_failure(&mut self, status: u16, body: String) {
        println!("http {status}: {body}");
    }

    fn on_error(&mut self, error: RequestError) {
        println!("error: {error}");
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let url = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://httpbin.org/anything".to_owned());
    let executor = RequestExecutor::new()?;

    let spec = RequestSpec::json(Method::Post, url.clone(), &json!({"name": "Kit"}))?;
    match executor.send(&spec).await {
        Outcome::Success(body) => println!("{body}"),
        Outcome::Failure { status, body } => println!("http {status}: {body}"),
        Outcome::Error(err) => return Err(err.into()),
    }

    LocalSet::new()
        .run_until(async {
            executor
                .execute(RequestSpec::get(url), PrintListener)
                .await
        })
        .await?;

    Ok(())
}
