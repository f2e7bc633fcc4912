mod config;

use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{App, HttpResponse, HttpServer, Responder, get, middleware, web};
use anyhow::Context;
use log::{debug, info};
use serde::Deserialize;

use lorem_core::{Lorem, LoremError, RandomSource, SeededRandom, ThreadRandom, WordCorpus};

use crate::config::ServerConfig;

/// Query parameters shared by every generation endpoint.
#[derive(Deserialize)]
struct CountQuery {
	count: Option<i32>,
}

/// Generator shared by all workers. The random source is chosen at startup.
type SharedLorem = Lorem<Box<dyn RandomSource>>;

fn text(result: Result<String, LoremError>) -> HttpResponse {
	match result {
		Ok(body) => HttpResponse::Ok().content_type("text/plain; charset=utf-8").body(body),
		Err(e) => bad_request(e),
	}
}

fn list(result: Result<Vec<String>, LoremError>) -> HttpResponse {
	match result {
		Ok(values) => HttpResponse::Ok().json(values),
		Err(e) => bad_request(e),
	}
}

fn bad_request(e: LoremError) -> HttpResponse {
	debug!("rejected request: {e}");
	HttpResponse::BadRequest().body(e.to_string())
}

/// Upper bound on the `count` query parameter, from `LOREM_MAX_COUNT`.
#[derive(Debug, Clone, Copy)]
struct CountLimit(i32);

impl CountLimit {
	/// Rejects counts above the limit. Non-positive counts are left to the generator.
	fn check(&self, count: Option<i32>) -> Result<Option<i32>, HttpResponse> {
		match count {
			Some(count) if count > self.0 => {
				debug!("rejected count {count} above limit {}", self.0);
				Err(HttpResponse::BadRequest().body(format!("count must not exceed {}", self.0)))
			}
			count => Ok(count),
		}
	}
}

/// HTTP GET endpoint `/v1/characters`
#[get("/v1/characters")]
async fn get_characters(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	match count {
		Some(count) => text(lorem.characters(count)),
		None => text(Ok(lorem.default_characters())),
	}
}

/// HTTP GET endpoint `/v1/words`
#[get("/v1/words")]
async fn get_words(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	list(lorem.words(count.unwrap_or(1)))
}

/// HTTP GET endpoint `/v1/sentence`, `count` is the minimum word count.
#[get("/v1/sentence")]
async fn get_sentence(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	match count {
		Some(count) => text(lorem.sentence(count)),
		None => text(Ok(lorem.default_sentence())),
	}
}

/// HTTP GET endpoint `/v1/sentences`
#[get("/v1/sentences")]
async fn get_sentences(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	list(lorem.sentences(count.unwrap_or(1)))
}

/// HTTP GET endpoint `/v1/paragraph`, `count` is the minimum sentence count.
#[get("/v1/paragraph")]
async fn get_paragraph(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	match count {
		Some(count) => text(lorem.paragraph(count)),
		None => text(Ok(lorem.default_paragraph())),
	}
}

/// HTTP GET endpoint `/v1/paragraphs`
#[get("/v1/paragraphs")]
async fn get_paragraphs(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	list(lorem.paragraphs(count.unwrap_or(1)))
}

/// HTTP GET endpoint `/v1/title`, a missing or non-positive `count` picks a random length.
#[get("/v1/title")]
async fn get_title(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	text(Ok(lorem.content_title(count.unwrap_or(0))))
}

/// HTTP GET endpoint `/v1/tags`, a missing or non-positive `count` picks a random length.
#[get("/v1/tags")]
async fn get_tags(
	lorem: web::Data<SharedLorem>,
	limit: web::Data<CountLimit>,
	query: web::Query<CountQuery>,
) -> HttpResponse {
	let count = match limit.check(query.count) {
		Ok(count) => count,
		Err(response) => return response,
	};
	text(Ok(lorem.content_tags(count.unwrap_or(0))))
}

/// HTTP GET endpoint `/v1/corpus`, the loaded word list.
#[get("/v1/corpus")]
async fn get_corpus(lorem: web::Data<SharedLorem>) -> impl Responder {
	HttpResponse::Ok().json(lorem.corpus().words())
}

fn routes(cfg: &mut web::ServiceConfig) {
	cfg.service(get_characters)
		.service(get_words)
		.service(get_sentence)
		.service(get_sentences)
		.service(get_paragraph)
		.service(get_paragraphs)
		.service(get_title)
		.service(get_tags)
		.service(get_corpus);
}

/// Builds the shared generator from the configuration.
fn build_lorem(config: &ServerConfig) -> anyhow::Result<SharedLorem> {
	let corpus = match &config.corpus {
		Some(path) => WordCorpus::from_file(path, config.separator)
			.with_context(|| format!("Failed to load corpus {}", path.display()))?,
		None => WordCorpus::default(),
	};
	info!("Corpus ready with {} words", corpus.len());

	let random: Box<dyn RandomSource> = match config.seed {
		Some(seed) => {
			info!("Using seeded random source ({seed})");
			Box::new(SeededRandom::new(seed))
		}
		None => Box::new(ThreadRandom),
	};

	Ok(Lorem::new(Arc::new(corpus), random))
}

/// Main entry point for the server.
///
/// Loads the configuration and the corpus, then serves the generator
/// on `LOREM_HOST:LOREM_PORT`.
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
	let config = ServerConfig::from_env()?;

	env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.rust_log)).init();

	let lorem = web::Data::new(build_lorem(&config)?);
	let limit = web::Data::new(CountLimit(config.max_count));

	info!("Listening on {}:{} with {} workers", config.host, config.port, config.workers);
	HttpServer::new(move || {
		App::new()
			.wrap(middleware::Logger::default())
			.wrap(Cors::permissive())
			.app_data(lorem.clone())
			.app_data(limit.clone())
			.configure(routes)
	})
		.workers(config.workers)
		.bind((config.host.as_str(), config.port))?
		.run()
		.await?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use actix_web::http::StatusCode;
	use actix_web::test;

	fn seeded_lorem() -> web::Data<SharedLorem> {
		let random: Box<dyn RandomSource> = Box::new(SeededRandom::new(11));
		web::Data::new(Lorem::new(Arc::new(WordCorpus::default()), random))
	}

	fn count_limit(max: i32) -> web::Data<CountLimit> {
		web::Data::new(CountLimit(max))
	}

	#[actix_web::test]
	async fn sentence_endpoint_returns_plain_text() {
		let app = test::init_service(App::new().app_data(seeded_lorem()).app_data(count_limit(100)).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/sentence?count=3").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let body = test::read_body(resp).await;
		let sentence = std::str::from_utf8(&body).unwrap();
		assert!(sentence.ends_with('.'));
		let words = sentence.trim_end_matches('.').split(' ').count();
		assert!((3..=8).contains(&words));
	}

	#[actix_web::test]
	async fn list_endpoints_return_json_arrays() {
		let app = test::init_service(App::new().app_data(seeded_lorem()).app_data(count_limit(100)).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/paragraphs?count=4").to_request();
		let paragraphs: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(paragraphs.len(), 4);

		let req = test::TestRequest::get().uri("/v1/words").to_request();
		let words: Vec<String> = test::call_and_read_body_json(&app, req).await;
		assert_eq!(words.len(), 1);
	}

	#[actix_web::test]
	async fn non_positive_counts_are_bad_requests() {
		let app = test::init_service(App::new().app_data(seeded_lorem()).app_data(count_limit(100)).configure(routes)).await;

		for uri in ["/v1/characters?count=0", "/v1/words?count=-1", "/v1/sentences?count=0", "/v1/paragraph?count=-2"] {
			let req = test::TestRequest::get().uri(uri).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}
	}

	#[actix_web::test]
	async fn title_and_tags_accept_non_positive_counts() {
		let app = test::init_service(App::new().app_data(seeded_lorem()).app_data(count_limit(100)).configure(routes)).await;

		let req = test::TestRequest::get().uri("/v1/title?count=-1").to_request();
		let resp = test::call_service(&app, req).await;
		assert_eq!(resp.status(), StatusCode::OK);

		let req = test::TestRequest::get().uri("/v1/tags").to_request();
		let body = test::call_and_read_body(&app, req).await;
		let tags = std::str::from_utf8(&body).unwrap();
		assert!(!tags.is_empty());
		assert!(tags.split(',').all(|t| !t.is_empty()));
	}

	#[actix_web::test]
	async fn counts_above_the_limit_are_bad_requests() {
		let app = test::init_service(App::new().app_data(seeded_lorem()).app_data(count_limit(100)).configure(routes)).await;

		for uri in [
			"/v1/characters?count=2000000000",
			"/v1/words?count=101",
			"/v1/sentence?count=101",
			"/v1/paragraphs?count=500",
			"/v1/title?count=101",
			"/v1/tags?count=1000",
		] {
			let req = test::TestRequest::get().uri(uri).to_request();
			let resp = test::call_service(&app, req).await;
			assert_eq!(resp.status(), StatusCode::BAD_REQUEST, "{uri}");
		}

		let req = test::TestRequest::get().uri("/v1/characters?count=100").to_request();
		let body = test::call_and_read_body(&app, req).await;
		assert_eq!(body.len(), 100);
	}

	#[::core::prelude::v1::test]
	fn count_limit_passes_missing_and_non_positive_counts() {
		let limit = CountLimit(10);
		assert_eq!(limit.check(None).unwrap(), None);
		assert_eq!(limit.check(Some(10)).unwrap(), Some(10));
		assert_eq!(limit.check(Some(-5)).unwrap(), Some(-5));
		assert!(limit.check(Some(11)).is_err());
	}
}
