//! Session-scoped shopping cart.

use askama::Template;
use axum::{extract::State, response::IntoResponse};

use showcase_core::orders::{Order, ShoppingCart};
use showcase_session::HttpSession;

use super::{pages::HtmlTemplate, AppError};
use crate::state::AppState;

/// Session attribute holding the cart.
pub const CART_ATTRIBUTE: &str = "cart";

/// Lists the orders of the caller's cart.
#[derive(Template)]
#[template(path = "orders.html")]
struct OrdersTemplate {
    orders: Vec<Order>,
}

/// GET /orders - Appends an empty order to the session's cart and lists it.
#[axum::debug_handler]
pub async fn orders(
    State(state): State<AppState>,
    session: HttpSession,
) -> Result<impl IntoResponse, AppError> {
    let (mut session, jar) = session.into_parts();

    let mut cart: ShoppingCart = match session.attribute(CART_ATTRIBUTE)? {
        Some(cart) => cart,
        None => {
            tracing::info!("Creating new cart");
            ShoppingCart::new()
        }
    };

    cart.add_order(Order::placed_now(state.next_cart_order_id()?));
    session.set_attribute(CART_ATTRIBUTE, &cart)?;

    tracing::debug!(session_id = %session.id, orders = cart.len(), "Cart updated");

    let jar = state.sessions.commit(session, jar).await?;
    let template = OrdersTemplate {
        orders: cart.orders().to_vec(),
    };

    Ok((jar, HtmlTemplate(template)))
}
