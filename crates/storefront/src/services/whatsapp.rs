//! WhatsApp contact handoff.
//!
//! Checkout and per-product contact actions hand the conversation to
//! WhatsApp: a deep link with the destination phone and a pre-filled,
//! URL-encoded message. One-way, fire-and-forget; no response is awaited.

use solara_core::{Cart, CartItem};

const SEND_ENDPOINT: &str = "https://api.whatsapp.com/send";

/// Build the checkout handoff link for a cart.
///
/// Returns `None` for an empty cart: the caller shows a blocking notice
/// instead of opening a conversation with an empty order.
#[must_use]
pub fn order_link(phone: &str, cart: &Cart) -> Option<String> {
    if cart.is_empty() {
        return None;
    }

    let mut message = String::from("Hello! I would like to place the following order:\n\n");
    for item in cart.items() {
        message.push_str(&order_line(item));
        message.push('\n');
    }
    message.push_str(&format!("\nTotal: {}\n\nIs it available?", cart.subtotal()));

    Some(send_link(phone, &message))
}

/// Build a single-product availability inquiry link.
#[must_use]
pub fn inquiry_link(phone: &str, title: &str, product_link: &str) -> String {
    let message =
        format!("Hello! I am interested in \"{title}\" ({product_link}). Is it available?");
    send_link(phone, &message)
}

fn order_line(item: &CartItem) -> String {
    format!(
        "- {} (x{}) - {}",
        item.product.title,
        item.quantity,
        item.line_total()
    )
}

fn send_link(phone: &str, message: &str) -> String {
    format!(
        "{SEND_ENDPOINT}?phone={phone}&text={}",
        urlencoding::encode(message)
    )
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use solara_core::Cart;

    use super::*;

    const PHONE: &str = "5493512000000";
    const BASE: &str = "https://solara.example.com";

    fn sample_product(id: &str, title: &str, price: i64) -> solara_core::Product {
        use rust_decimal::Decimal;
        use solara_core::{Price, ProductId};
        solara_core::Product {
            id: ProductId::new(id),
            title: title.to_owned(),
            description: String::new(),
            price: Price::new(Decimal::from(price)),
            category: "Sol".to_owned(),
            images: Vec::new(),
            color: String::new(),
            material: String::new(),
            shape: String::new(),
            gender: String::new(),
            flexibility: String::new(),
            featured: false,
            link: None,
        }
    }

    #[test]
    fn test_empty_cart_has_no_order_link() {
        assert!(order_link(PHONE, &Cart::new()).is_none());
    }

    #[test]
    fn test_order_link_contains_lines_and_total() {
        let mut cart = Cart::new();
        cart.add(sample_product("p1", "Aviator", 100), BASE);
        cart.add(sample_product("p2", "Wayfarer", 150), BASE);
        cart.add(sample_product("p2", "Wayfarer", 150), BASE);

        let link = order_link(PHONE, &cart).unwrap();
        assert!(link.starts_with("https://api.whatsapp.com/send?phone=5493512000000&text="));

        let encoded = link.split("&text=").nth(1).unwrap();
        let message = urlencoding::decode(encoded).unwrap();
        assert!(message.contains("- Aviator (x1) - $100.00"));
        assert!(message.contains("- Wayfarer (x2) - $300.00"));
        assert!(message.contains("Total: $400.00"));
    }

    #[test]
    fn test_inquiry_link_encodes_title_and_link() {
        let link = inquiry_link(PHONE, "Aviator Azul", "https://solara.example.com/products/p1");
        let encoded = link.split("&text=").nth(1).unwrap();
        let message = urlencoding::decode(encoded).unwrap();
        assert!(message.contains("Aviator Azul"));
        assert!(message.contains("https://solara.example.com/products/p1"));
    }
}
