use crate::{
    api::{approval, balance, leave_request},
    auth::middleware::auth_middleware,
    config::Config,
};
use actix_web::{middleware::from_fn, web};

pub fn configure(cfg: &mut web::ServiceConfig, config: Config) {
    cfg.service(
        web::scope(&config.api_prefix)
            .wrap(from_fn(auth_middleware))
            .service(
                web::scope("/leave")
                    // /leave
                    .service(
                        web::resource("")
                            .route(web::post().to(leave_request::submit_leave))
                            .route(web::get().to(leave_request::leave_history)),
                    )
                    // /leave/balances
                    .service(
                        web::resource("/balances").route(web::get().to(balance::leave_balances)),
                    )
                    // /leave/pending
                    .service(
                        web::resource("/pending").route(web::get().to(approval::pending_requests)),
                    )
                    // /leave/handled
                    .service(
                        web::resource("/handled").route(web::get().to(approval::handled_requests)),
                    )
                    // /leave/{id}/approve
                    .service(
                        web::resource("/{id}/approve")
                            .route(web::put().to(approval::approve_request)),
                    )
                    // /leave/{id}/reject
                    .service(
                        web::resource("/{id}/reject").route(web::put().to(approval::reject_request)),
                    ),
            ),
    );
}
