use crate::config::CONFIG;
use crate::error::ClientError;
use crate::models::{server_message, AuthReply, LoginRequest, Page, RegisterRequest, UserProfile};
use crate::services::api_client::ApiReply;
use crate::services::http::HttpTransport;
use crate::services::outcome::FlowOutcome;
use crate::state::{AppContext, KeyValueStore};

/// Which login form was submitted
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LoginMode {
    User,
    Admin,
}

impl LoginMode {
    fn landing(self) -> Page {
        match self {
            LoginMode::User => Page::Home,
            LoginMode::Admin => Page::AdminHome,
        }
    }
}

/// Log in with email + password, persisting the session on success
pub async fn login<T: HttpTransport, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
    request: LoginRequest,
    mode: LoginMode,
) -> FlowOutcome {
    log::debug!("🔐 [LOGIN] Attempt for {} ({:?})", request.email, mode);

    let reply = match ctx.api.login(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("❌ [LOGIN] {}", e);
            return unreachable_backend(&e);
        }
    };

    if accept_session(ctx, &reply, || UserProfile::with_email(&request.email)) {
        return FlowOutcome::navigate("Login successful!", mode.landing());
    }

    log::warn!("⚠️ [LOGIN] Rejected with HTTP {}", reply.status);
    FlowOutcome::stay(server_message(&reply.body).unwrap_or_else(|| "Login failed".to_string()))
}

/// Create an account; a successful registration is also a login
pub async fn register<T: HttpTransport, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
    request: RegisterRequest,
) -> FlowOutcome {
    log::debug!("📝 [REGISTER] Attempt for {}", request.email);

    let reply = match ctx.api.register(&request).await {
        Ok(reply) => reply,
        Err(e) => {
            log::error!("❌ [REGISTER] {}", e);
            return unreachable_backend(&e);
        }
    };

    if accept_session(ctx, &reply, || UserProfile::from_registration(&request)) {
        return FlowOutcome::navigate("Registration successful! Welcome!", Page::Home);
    }

    log::warn!("⚠️ [REGISTER] Rejected with HTTP {}", reply.status);
    FlowOutcome::stay(
        server_message(&reply.body).unwrap_or_else(|| format!("Registration failed: {}", reply.body)),
    )
}

/// Store token + user when the reply is a success carrying a token
fn accept_session<T, S: KeyValueStore>(
    ctx: &AppContext<T, S>,
    reply: &ApiReply,
    fallback_user: impl FnOnce() -> UserProfile,
) -> bool {
    if !reply.ok {
        return false;
    }
    let AuthReply { token, user } = AuthReply::from_body(&reply.body);
    let Some(token) = token else {
        return false;
    };

    ctx.session.set_auth(&token);
    ctx.session.set_user(&user.unwrap_or_else(fallback_user));
    log::info!("✅ [AUTH] Session stored");
    true
}

fn unreachable_backend(error: &ClientError) -> FlowOutcome {
    FlowOutcome::stay(format!(
        "Network or server error: {}\n\nMake sure backend is running on {}",
        error,
        CONFIG.backend_origin()
    ))
}
