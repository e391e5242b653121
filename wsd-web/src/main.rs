//! Servidor web Axum com WebSocket para visualização da desambiguação de Lesk em tempo real

use askama::Template;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, Query, State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;
use tracing_subscriber::EnvFilter;
use wsd_core::{
    corpus::{demo_texts, get_corpus},
    evaluate::{evaluate, extract_phrases, DEFAULT_SAMPLE_SIZE},
    CachesReport, Disambiguation, EvaluationReport, LeskEvent, LexiconError, Sense, SimpleLesk,
    WsdConfig,
};

const ADDR_ENV: &str = "WSD_ADDR";
const DEFAULT_ADDR: &str = "0.0.0.0:3000";

/// Pausa entre eventos do WebSocket, para a animação passo a passo.
const EVENT_DELAY_MS: u64 = 35;

/// Estado compartilhado da aplicação
struct AppState {
    lesk: SimpleLesk,
}

#[derive(Deserialize)]
struct DisambiguateRequest {
    word: String,
    #[serde(default)]
    context: String,
}

#[derive(Serialize)]
struct DisambiguateResponse {
    #[serde(flatten)]
    result: Disambiguation,
    processing_ms: u64,
}

#[derive(Serialize)]
struct SensesResponse {
    word: String,
    senses: Vec<Arc<Sense>>,
    total: usize,
}

#[derive(Deserialize)]
struct EvaluateParams {
    limit: Option<usize>,
}

/// Texto de exemplo exibido na página inicial
#[derive(Serialize)]
struct DemoText {
    domain: &'static str,
    word: &'static str,
    text: &'static str,
}

#[derive(Template)]
#[template(path = "index.html")]
struct IndexTemplate {
    demos: Vec<DemoText>,
    categories: String,
}

/// Erros das rotas HTTP
enum ApiError {
    BadRequest(&'static str),
    Lexicon(LexiconError),
    Internal(String),
}

impl From<LexiconError> for ApiError {
    fn from(err: LexiconError) -> Self {
        ApiError::Lexicon(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(message) => (StatusCode::BAD_REQUEST, message.to_string()),
            ApiError::Lexicon(err) => {
                tracing::error!("falha na base lexical: {}", err);
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
            ApiError::Internal(message) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        };
        (status, Json(serde_json::json!({ "error": message }))).into_response()
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = WsdConfig::from_env()?;
    let db = config.load_lexicon()?;
    let lesk = SimpleLesk::with_config(db, &config);
    info!(
        "Desambiguador pronto [{:?} | categorias {:?}]",
        lesk.signature_scope(),
        lesk.categories()
    );
    let state = Arc::new(AppState { lesk });

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/disambiguate", post(disambiguate_handler))
        .route("/senses/:word", get(senses_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .route("/evaluate", get(evaluate_handler))
        .route("/caches", get(caches_handler))
        .route("/caches/clear", post(clear_caches_handler))
        .route("/ws", get(ws_handler))
        .layer(cors)
        .with_state(state);

    let addr = std::env::var(ADDR_ENV).unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Servidor WSD iniciado em http://{}", addr);
    axum::serve(listener, app).await?;
    Ok(())
}

fn demo_list() -> Vec<DemoText> {
    demo_texts()
        .into_iter()
        .map(|(domain, word, text)| DemoText { domain, word, text })
        .collect()
}

/// Retorna a página principal HTML
async fn index_handler(State(state): State<Arc<AppState>>) -> Result<Html<String>, ApiError> {
    let categories = state
        .lesk
        .categories()
        .iter()
        .map(|c| c.name())
        .collect::<Vec<_>>()
        .join(", ");
    let page = IndexTemplate {
        demos: demo_list(),
        categories,
    };
    page.render()
        .map(Html)
        .map_err(|err| ApiError::Internal(format!("falha ao renderizar página: {}", err)))
}

/// Desambiguação via HTTP POST (sem streaming)
async fn disambiguate_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<DisambiguateRequest>,
) -> Result<Json<DisambiguateResponse>, ApiError> {
    let word = req.word.trim();
    if word.is_empty() {
        return Err(ApiError::BadRequest("Palavra vazia"));
    }

    let start = Instant::now();
    let result = state.lesk.disambiguate_scored(word, &req.context)?;
    Ok(Json(DisambiguateResponse {
        result,
        processing_ms: start.elapsed().as_millis() as u64,
    }))
}

/// Lista todos os sentidos de uma palavra
async fn senses_handler(
    State(state): State<Arc<AppState>>,
    Path(word): Path<String>,
) -> Result<Json<SensesResponse>, ApiError> {
    let word = word.trim();
    if word.is_empty() {
        return Err(ApiError::BadRequest("Palavra vazia"));
    }
    let senses = state.lesk.all_senses(word)?;
    Ok(Json(SensesResponse {
        word: word.to_string(),
        total: senses.len(),
        senses,
    }))
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    Json(demo_list())
}

/// Avalia o corpus embutido (em thread bloqueante: a avaliação usa rayon)
async fn evaluate_handler(
    State(state): State<Arc<AppState>>,
    Query(params): Query<EvaluateParams>,
) -> Result<Json<EvaluationReport>, ApiError> {
    let limit = params.limit.unwrap_or(DEFAULT_SAMPLE_SIZE);
    let report = tokio::task::spawn_blocking(move || {
        let phrases = extract_phrases(&get_corpus(), &state.lesk, limit)?;
        evaluate(&state.lesk, &phrases)
    })
    .await
    .map_err(|err| ApiError::Internal(format!("avaliação interrompida: {}", err)))??;
    Ok(Json(report))
}

async fn caches_handler(State(state): State<Arc<AppState>>) -> Json<CachesReport> {
    Json(state.lesk.cache_stats())
}

async fn clear_caches_handler(State(state): State<Arc<AppState>>) -> Json<CachesReport> {
    state.lesk.clear_caches();
    info!("Caches esvaziados");
    Json(state.lesk.cache_stats())
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe {word, context}, executa o Lesk e envia eventos em tempo real
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                let req = match serde_json::from_str::<DisambiguateRequest>(&text) {
                    Ok(req) if !req.word.trim().is_empty() => req,
                    _ => {
                        let event = LeskEvent::Error {
                            message: "Esperado JSON {word, context} com palavra não vazia".to_string(),
                        };
                        if send_event(&mut socket, &event).await.is_err() {
                            return;
                        }
                        continue;
                    }
                };

                info!("Desambiguando via WebSocket: '{}' ({} chars de contexto)", req.word.trim(), req.context.len());

                // O Lesk é síncrono: roda fora do runtime
                let (tx, rx) = std::sync::mpsc::channel::<LeskEvent>();
                let lesk_state = Arc::clone(&state);
                let handle = tokio::task::spawn_blocking(move || {
                    lesk_state
                        .lesk
                        .disambiguate_streaming(req.word.trim(), &req.context, tx);
                });
                if let Err(err) = handle.await {
                    tracing::error!("desambiguação interrompida: {}", err);
                }

                // Coleta todos os eventos (o Lesk já terminou)
                let events: Vec<LeskEvent> = rx.try_iter().collect();

                for event in &events {
                    if send_event(&mut socket, event).await.is_err() {
                        return; // cliente desconectou
                    }
                    tokio::time::sleep(tokio::time::Duration::from_millis(EVENT_DELAY_MS)).await;
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

async fn send_event(socket: &mut WebSocket, event: &LeskEvent) -> Result<(), axum::Error> {
    match serde_json::to_string(event) {
        Ok(json) => socket.send(Message::Text(json.into())).await,
        Err(err) => {
            tracing::warn!("evento não serializável: {}", err);
            Ok(())
        }
    }
}
