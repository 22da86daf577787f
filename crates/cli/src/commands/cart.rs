//! Cart commands.
//!
//! Every mutating command prints any pending notifications and re-renders
//! the cart afterwards, so the shell always shows the post-mutation state.

use majik_bloom_core::ProductId;
use majik_bloom_storefront::cart::storage::KeyValueStorage;
use majik_bloom_storefront::cart::store::QuantityUpdate;
use majik_bloom_storefront::state::Storefront;

/// Render the cart without mutating it.
pub fn show<S: KeyValueStorage>(shop: &Storefront<S>) {
    render(shop);
}

/// Add one unit of the product to the cart.
pub fn add<S: KeyValueStorage>(shop: &mut Storefront<S>, id: &str) {
    if let Some(id) = parse_id(id) {
        shop.add_to_cart(id);
    }
    finish(shop);
}

/// Increase the line's quantity by one.
pub fn increment<S: KeyValueStorage>(shop: &mut Storefront<S>, id: &str) {
    if let Some(id) = parse_id(id) {
        shop.update_quantity(id, QuantityUpdate::Increment);
    }
    finish(shop);
}

/// Decrease the line's quantity by one, stopping at 1.
pub fn decrement<S: KeyValueStorage>(shop: &mut Storefront<S>, id: &str) {
    if let Some(id) = parse_id(id) {
        shop.update_quantity(id, QuantityUpdate::Decrement);
    }
    finish(shop);
}

/// Set the line's quantity to an absolute value.
///
/// Zero never reaches this point; the argument parser rejects it.
pub fn set<S: KeyValueStorage>(shop: &mut Storefront<S>, id: &str, quantity: u32) {
    if let Some(id) = parse_id(id) {
        shop.update_quantity(id, QuantityUpdate::Set(quantity));
    }
    finish(shop);
}

/// Remove the product's line from the cart.
pub fn remove<S: KeyValueStorage>(shop: &mut Storefront<S>, id: &str) {
    if let Some(id) = parse_id(id) {
        shop.remove_from_cart(id);
    }
    finish(shop);
}

/// Run the stub checkout.
pub fn checkout<S: KeyValueStorage>(shop: &Storefront<S>) {
    match shop.checkout() {
        Ok(receipt) => println!("{}", receipt.message),
        Err(e) => println!("{e}"),
    }
}

/// Parse a command-line product id.
///
/// Ids that are not integers behave exactly like ids of products that do
/// not exist: the command is a silent no-op.
fn parse_id(id: &str) -> Option<ProductId> {
    match id.parse::<ProductId>() {
        Ok(id) => Some(id),
        Err(_) => {
            tracing::debug!(id, "ignoring unparseable product id");
            None
        }
    }
}

fn finish<S: KeyValueStorage>(shop: &Storefront<S>) {
    for notification in shop.notifications().entries() {
        println!("{}", notification.message());
    }
    render(shop);
}

fn render<S: KeyValueStorage>(shop: &Storefront<S>) {
    let view = shop.cart_view();

    if view.items.is_empty() {
        println!("Your cart is empty.");
        return;
    }

    println!("{:>4}  {:<24} {:>8}  {:>4}  {:>10}", "id", "item", "price", "qty", "total");
    for item in &view.items {
        println!(
            "{:>4}  {:<24} {:>8}  {:>4}  {:>10}",
            item.id, item.name, item.price, item.quantity, item.line_total
        );
    }

    println!();
    println!("Subtotal: {}", view.subtotal);
    println!("Tax:      {}", view.tax);
    println!("Total:    {}", view.total);
    println!("Items in cart: {}", view.item_count);
}
