use anyhow::Result;
use log::debug;

use crate::db::store::VisitRepository;
use crate::models::visit::Visit;
use crate::structs::visit_request::VisitRequest;

/// Persist one visit. The address the client reported is replaced by
/// `client_ip`, and a session id is generated when none was sent.
pub async fn record_visit<S>(store: &S, req: VisitRequest, client_ip: String) -> Result<Visit>
where
    S: VisitRepository + ?Sized,
{
    let visit = Visit::new(
        client_ip,
        req.user_agent,
        req.path,
        req.referrer,
        req.session_id,
    );
    store.insert_visit(&visit).await?;
    debug!("Recorded visit to {} from {}", visit.path, visit.ip_address);
    Ok(visit)
}
