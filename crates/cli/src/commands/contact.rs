//! Contact form command.

use majik_bloom_storefront::ui::contact::{ContactForm, SUBMIT_MESSAGE};

/// Validate and "send" a contact message.
///
/// Validation failures print the form's user-facing message; nothing is
/// actually sent anywhere in the demo shop.
pub fn submit(name: String, email: String, message: String) {
    let mut form = ContactForm::with_fields(name, email, message);

    match form.submit() {
        Ok(_) => println!("{SUBMIT_MESSAGE}"),
        Err(e) => println!("{e}"),
    }
}
