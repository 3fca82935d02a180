#[cfg(test)]
mod tests {
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, AsyncTestContext};
    use todolist::api::{http::HttpTodoApi, ClientError, TodoApi};
    use todolist::db::db::DB_FILE_NAME;
    use todolist::libs::board::{Board, Outcome};
    use todolist::libs::config::ClientConfig;
    use todolist::libs::todo::TodoId;
    use todolist::server::{self, store::Store, AppState};
    use tokio::net::TcpListener;
    use tokio::sync::oneshot;
    use tokio::task::JoinHandle;

    /// A live server on an ephemeral port, stopped on teardown.
    struct ServerContext {
        _temp_dir: TempDir,
        api: HttpTodoApi,
        shutdown: Option<oneshot::Sender<()>>,
        handle: Option<JoinHandle<anyhow::Result<()>>>,
    }

    impl AsyncTestContext for ServerContext {
        async fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let store = Store::open(temp_dir.path().join(DB_FILE_NAME)).unwrap();
            let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
            let address = listener.local_addr().unwrap();

            let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();
            let handle = tokio::spawn(server::run(listener, AppState::new(store), async move {
                let _ = shutdown_rx.await;
            }));

            let api = HttpTodoApi::new(&ClientConfig {
                api_url: format!("http://{}/api", address),
                timeout_secs: 5,
            })
            .unwrap();

            ServerContext {
                _temp_dir: temp_dir,
                api,
                shutdown: Some(shutdown_tx),
                handle: Some(handle),
            }
        }

        async fn teardown(mut self) {
            if let Some(shutdown) = self.shutdown.take() {
                let _ = shutdown.send(());
            }
            if let Some(handle) = self.handle.take() {
                let _ = tokio::time::timeout(Duration::from_secs(5), handle).await;
            }
        }
    }

    #[test_context(ServerContext)]
    #[tokio::test]
    async fn test_client_round_trip(ctx: &mut ServerContext) {
        assert!(ctx.api.list().await.unwrap().is_empty());

        let created = ctx.api.create("  Buy milk  ").await.unwrap();
        assert_eq!(created.title, "Buy milk");
        assert!(!created.completed);

        let toggled = ctx.api.toggle(created.id).await.unwrap();
        assert!(toggled.completed);
        assert_eq!(toggled.created_at, created.created_at);

        let listed = ctx.api.list().await.unwrap();
        assert_eq!(listed, vec![toggled]);

        ctx.api.delete(created.id).await.unwrap();
        assert!(ctx.api.list().await.unwrap().is_empty());
    }

    #[test_context(ServerContext)]
    #[tokio::test]
    async fn test_client_surfaces_server_errors(ctx: &mut ServerContext) {
        let missing = TodoId::new(12345).unwrap();

        let error = ctx.api.toggle(missing).await.unwrap_err();
        assert_eq!(
            error,
            ClientError::Api {
                status: 404,
                message: Some("Todo not found".to_string()),
            }
        );

        let error = ctx.api.create("   ").await.unwrap_err();
        assert_eq!(error.server_message(), Some("Title is required and cannot be empty"));
    }

    #[test_context(ServerContext)]
    #[tokio::test]
    async fn test_board_over_http(ctx: &mut ServerContext) {
        ctx.api.create("Existing").await.unwrap();

        let mut board = Board::new(ctx.api.clone());
        assert_eq!(board.refresh().await, Outcome::Applied);
        assert_eq!(board.todos().len(), 1);

        assert_eq!(board.submit("Fresh").await, Outcome::Applied);
        assert_eq!(board.todos()[0].title, "Fresh");

        let fresh = board.todos()[0].id;
        assert_eq!(board.toggle(fresh).await, Outcome::Applied);
        assert_eq!(board.summary().completed, 1);

        assert_eq!(board.delete(fresh, &|_: &str| true).await, Outcome::Applied);

        // The mirror matches a fresh fetch
        let server_view = ctx.api.list().await.unwrap();
        assert_eq!(board.todos(), server_view.as_slice());
    }

    #[tokio::test]
    async fn test_unreachable_server_is_a_network_error() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);

        let api = HttpTodoApi::new(&ClientConfig {
            api_url: format!("http://{}/api", address),
            timeout_secs: 2,
        })
        .unwrap();

        let mut board = Board::new(api);
        assert_eq!(board.refresh().await, Outcome::Failed);
        assert!(board.notice().unwrap().message().starts_with("Error while loading tasks: "));
    }
}
