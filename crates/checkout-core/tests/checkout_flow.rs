//! End-to-end checkout flow: registration, search, cart, payment, order.
//!
//! Payment, order placement and search are stand-ins implementing the
//! collaborator traits.

use checkout_core::collaborators::{
    OrderConfirmation, OrderPlacement, PaymentDetails, PaymentMethod, PaymentMethodKind,
    PaymentProcessor, PaymentRequest, Restaurant, RestaurantMenu, RestaurantQuery,
    RestaurantSearch, UserProfile, PAYMENT_CONFIRMED_MESSAGE,
};
use checkout_core::{Cart, Money, RegistrationError, RegistrationValidator};
use tracing_subscriber::EnvFilter;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// =============================================================================
// Stand-in collaborators
// =============================================================================

struct SimulatedPaymentProcessor;

impl PaymentProcessor for SimulatedPaymentProcessor {
    fn process_payment(
        &self,
        request: &PaymentRequest,
        method: PaymentMethodKind,
        details: &PaymentDetails,
    ) -> String {
        if !request.total_amount.cents().is_positive() {
            return "Payment failed: nothing to charge".to_string();
        }
        let card_ok = details.card_number.len() == 16 && details.cvv.len() == 3;
        match method {
            PaymentMethodKind::CreditCard | PaymentMethodKind::DebitCard if card_ok => {
                PAYMENT_CONFIRMED_MESSAGE.to_string()
            }
            PaymentMethodKind::Paypal | PaymentMethodKind::Cash => {
                PAYMENT_CONFIRMED_MESSAGE.to_string()
            }
            _ => "Payment failed: invalid card details".to_string(),
        }
    }
}

struct Directory {
    restaurants: Vec<Restaurant>,
}

impl Directory {
    fn sample() -> Self {
        let restaurant = |name: &str, cuisine: &str, location: &str, rating: f32| Restaurant {
            name: name.to_string(),
            cuisine: cuisine.to_string(),
            location: location.to_string(),
            rating,
        };
        Directory {
            restaurants: vec![
                restaurant("Trattoria Roma", "Italian", "Downtown", 4.5),
                restaurant("Sakura", "Japanese", "Uptown", 4.7),
                restaurant("Luigi's", "Italian", "Suburbs", 3.9),
            ],
        }
    }
}

impl RestaurantSearch for Directory {
    fn search_restaurants(&self, query: &RestaurantQuery) -> Vec<Restaurant> {
        self.restaurants
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect()
    }
}

struct Order<'a> {
    cart: &'a Cart,
    profile: &'a UserProfile,
    menu: &'a RestaurantMenu,
}

impl OrderPlacement for Order<'_> {
    fn confirm_order(&self, _method: &PaymentMethod) -> OrderConfirmation {
        if self.cart.is_empty() {
            return OrderConfirmation::failed("Cart is empty");
        }
        if self.profile.delivery_address.trim().is_empty() {
            return OrderConfirmation::failed("Missing delivery address");
        }
        if let Some(item) = self
            .cart
            .items()
            .iter()
            .find(|i| !self.menu.is_available(&i.name))
        {
            return OrderConfirmation::failed(format!("{} is not available", item.name));
        }
        OrderConfirmation::confirmed(format!(
            "Order confirmed, total {}",
            self.cart.calculate_total().total
        ))
    }
}

fn menu() -> RestaurantMenu {
    RestaurantMenu::new(["Spaghetti", "Pizza", "Lasagna"])
}

fn card() -> PaymentDetails {
    PaymentDetails {
        card_number: "1234567890123456".to_string(),
        expiry_date: "12/24".to_string(),
        cvv: "123".to_string(),
    }
}

// =============================================================================
// Flow tests
// =============================================================================

#[test]
fn test_order_process_flow() {
    init_tracing();

    let query = RestaurantQuery {
        cuisine: Some("Italian".to_string()),
        location: Some("Downtown".to_string()),
        min_rating: Some(4.0),
    };
    let found = Directory::sample().search_restaurants(&query);
    assert!(!found.is_empty());
    assert_eq!(found[0].name, "Trattoria Roma");

    let mut cart = Cart::new();
    cart.add_item("Spaghetti", Money::from_cents(999), 2).unwrap();
    cart.add_item("Pizza", Money::from_cents(1299), 1).unwrap();

    let totals = cart.calculate_total();
    assert_eq!(totals.total, Money::from_cents(3297));

    let response = SimulatedPaymentProcessor.process_payment(
        &PaymentRequest::from(&totals),
        PaymentMethodKind::CreditCard,
        &card(),
    );
    assert_eq!(response, "Payment successful, Order confirmed");

    let profile = UserProfile::new("123 Main St");
    let menu = menu();
    let order = Order {
        cart: &cart,
        profile: &profile,
        menu: &menu,
    };
    let confirmation = order.confirm_order(&PaymentMethod::default());
    assert!(confirmation.success, "{}", confirmation.message);
}

#[test]
fn test_order_confirmation_failure_on_empty_cart() {
    init_tracing();

    let cart = Cart::new();
    let profile = UserProfile::new("123 Main St");
    let menu = menu();
    let order = Order {
        cart: &cart,
        profile: &profile,
        menu: &menu,
    };

    let confirmation = order.confirm_order(&PaymentMethod::default());
    assert!(!confirmation.success);
}

#[test]
fn test_registration_before_checkout() {
    init_tracing();

    let mut validator = RegistrationValidator::new();
    let outcome = validator.register("newuser@example.com", "SecurePass123", "SecurePass123");
    assert!(outcome.is_success());

    let outcome = validator.register("newuser@example.com", "SecurePass123", "SecurePass123");
    assert_eq!(outcome.rejection(), Some(&RegistrationError::DuplicateEmail));
}

#[test]
fn test_registration_scenarios() {
    init_tracing();

    // (email, password, confirmation, expected error; None = success)
    let scenarios: [(&str, &str, &str, Option<&str>); 5] = [
        ("user@example.com", "Password123", "Password123", None),
        (
            "userexample.com",
            "Password123",
            "Password123",
            Some("Invalid email format"),
        ),
        (
            "other@example.com",
            "Password123",
            "Password321",
            Some("Passwords do not match"),
        ),
        (
            "other@example.com",
            "pass",
            "pass",
            Some("Password is not strong enough"),
        ),
        ("", "Password123", "Password123", Some("Email cannot be empty")),
    ];

    let mut validator = RegistrationValidator::new();
    for (email, password, confirm, expected) in scenarios {
        let outcome = validator.register(email, password, confirm);
        match expected {
            None => assert!(outcome.is_success(), "{email} should register"),
            Some(error) => assert_eq!(outcome.error().as_deref(), Some(error), "{email}"),
        }
    }

    // Only the first scenario registered anything
    assert_eq!(validator.registered_count(), 1);
    assert!(!validator.is_registered("other@example.com"));
}

#[test]
fn test_unavailable_item_blocks_order() {
    let mut cart = Cart::new();
    cart.add_item("Sushi", Money::from_cents(1500), 1).unwrap();
    let profile = UserProfile::new("123 Main St");
    let menu = menu();

    let confirmation = Order {
        cart: &cart,
        profile: &profile,
        menu: &menu,
    }
    .confirm_order(&PaymentMethod::default());

    assert!(!confirmation.success);
    assert_eq!(confirmation.message, "Sushi is not available");
}
