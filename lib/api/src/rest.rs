use actix_cors::Cors;
use actix_web::{web, App, HttpResponse, HttpServer, Result as ActixResult};
use cinerec_catalog::CatalogStore;
use cinerec_core::{Error, Recommender};
use serde::Deserialize;
use std::sync::Arc;

/// Immutable shared state: built once at startup, injected into every
/// handler by reference. No request mutates it.
pub struct AppState {
    pub store: Arc<CatalogStore>,
    pub recommender: Arc<Recommender>,
}

#[derive(Deserialize)]
struct RecommendQuery {
    num_recommendations: Option<usize>,
}

pub struct RestApi;

impl RestApi {
    pub async fn start(
        store: Arc<CatalogStore>,
        recommender: Arc<Recommender>,
        port: u16,
    ) -> std::io::Result<()> {
        HttpServer::new(move || {
            let cors = Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600);

            App::new()
                .wrap(cors)
                .app_data(web::Data::new(AppState {
                    store: store.clone(),
                    recommender: recommender.clone(),
                }))
                .route(
                    "/cantidad_filmaciones_mes/{mes}",
                    web::get().to(cantidad_filmaciones_mes),
                )
                .route(
                    "/cantidad_filmaciones_dia/{dia}",
                    web::get().to(cantidad_filmaciones_dia),
                )
                .route("/score_titulo/{titulo}", web::get().to(score_titulo))
                .route("/votos_titulo/{titulo}", web::get().to(votos_titulo))
                .route("/get_actor/{nombre_actor}", web::get().to(get_actor))
                .route(
                    "/get_director/{nombre_director}",
                    web::get().to(get_director),
                )
                .route("/recomendacion/{titulo}", web::get().to(recomendacion))
        })
        .bind(("0.0.0.0", port))?
        .run()
        .await
    }
}

// Upper-case the first character, as the original service echoes month and
// day names back
fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

fn error_response(err: &Error) -> HttpResponse {
    let body = serde_json::json!({ "error": err.to_string() });
    match err {
        Error::InvalidParameter(_) => HttpResponse::BadRequest().json(body),
        Error::TitleNotFound(_) | Error::NotFound(_) => HttpResponse::NotFound().json(body),
        _ => HttpResponse::InternalServerError().json(body),
    }
}

async fn cantidad_filmaciones_mes(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let mes = path.into_inner();

    match state.store.count_by_release_month(&mes) {
        Ok(count) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!(
                "{} películas fueron estrenadas en el mes de {}",
                count,
                capitalize(&mes)
            )
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn cantidad_filmaciones_dia(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let dia = path.into_inner();

    match state.store.count_by_release_day(&dia) {
        Ok(count) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!(
                "{} películas fueron estrenadas en los días {}",
                count,
                capitalize(&dia)
            )
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn score_titulo(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let titulo = path.into_inner();

    match state.store.score_by_title(&titulo) {
        Ok(score) => {
            let year = score
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Desconocido".to_string());
            let popularity = score
                .popularity
                .map(|p| p.to_string())
                .unwrap_or_else(|| "Desconocido".to_string());
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": format!(
                    "La película {} fue estrenada en el año {} con un score/popularidad de {}",
                    score.title, year, popularity
                )
            })))
        }
        Err(e) => Ok(error_response(&e)),
    }
}

async fn votos_titulo(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let titulo = path.into_inner();

    match state.store.votes_by_title(&titulo) {
        Ok(votes) if votes.meets_threshold => {
            let year = votes
                .release_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "Desconocido".to_string());
            let average = votes
                .vote_average
                .map(|a| a.to_string())
                .unwrap_or_else(|| "Desconocido".to_string());
            Ok(HttpResponse::Ok().json(serde_json::json!({
                "message": format!(
                    "La película {} fue estrenada en el año {}. \
                     La misma cuenta con un total de {} valoraciones, con un promedio de {}",
                    votes.title, year, votes.vote_count, average
                )
            })))
        }
        Ok(votes) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!(
                "La película {} cuenta con menos de 2000 valoraciones ({})",
                votes.title, votes.vote_count
            )
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_actor(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let nombre = path.into_inner();

    match state.store.actor_stats(&nombre) {
        Ok(stats) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!(
                "El actor {} ha participado en {} películas, \
                 con un retorno total de {} y un promedio de retorno de {}",
                stats.name, stats.film_count, stats.total_return, stats.mean_return
            )
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn get_director(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> ActixResult<HttpResponse> {
    let nombre = path.into_inner();

    match state.store.director_films(&nombre) {
        Ok(films) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "message": format!(
                "El director {} ha dirigido las siguientes películas:",
                films.name
            ),
            "movies": films.films,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

async fn recomendacion(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<RecommendQuery>,
) -> ActixResult<HttpResponse> {
    let titulo = path.into_inner();
    let k = query.num_recommendations.unwrap_or(5);

    match state.recommender.recommend(&titulo, k) {
        Ok(results) => Ok(HttpResponse::Ok().json(serde_json::json!({
            "titulo": titulo,
            "recomendaciones": results,
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("octubre"), "Octubre");
        assert_eq!(capitalize("sábado"), "Sábado");
        assert_eq!(capitalize(""), "");
    }
}
