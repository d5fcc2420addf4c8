use chrono::{Duration, TimeZone, Utc};
use potion_shop::clients::Severity;
use potion_shop::config::ShopConfig;
use potion_shop::form::OrderField;
use potion_shop::framework::mock::{FixedClock, RecordingNotifier, ScriptedConfirmer};
use potion_shop::framework::Clock;
use potion_shop::ingredient_set::IngredientChange;
use potion_shop::lifecycle::PotionShop;
use potion_shop::model::{OrderStatus, Unit};
use potion_shop::validation::ValidationError;
use std::cell::RefCell;
use std::rc::Rc;

struct Harness {
    shop: PotionShop,
    notifier: RecordingNotifier,
    clock: FixedClock,
}

fn harness() -> Harness {
    let clock = FixedClock::new(Utc.with_ymd_and_hms(2025, 12, 20, 18, 30, 0).unwrap());
    let notifier = RecordingNotifier::new();
    let shop = PotionShop::new(
        ShopConfig::default(),
        Rc::new(clock.clone()),
        Rc::new(notifier.clone()),
    );
    Harness {
        shop,
        notifier,
        clock,
    }
}

fn add_ingredient(shop: &mut PotionShop, name: &str, quantity: f64, unit: Unit, price: f64) {
    let set = shop.form.ingredients_mut();
    let id = set.add();
    set.update(&id, IngredientChange::Name(name.to_string()));
    set.update(&id, IngredientChange::Unit(Some(unit)));
    set.update(&id, IngredientChange::Quantity(quantity));
    set.update(&id, IngredientChange::PricePerUnit(price));
}

fn fill_merlin(h: &mut Harness) {
    let ready = h.clock.now() + Duration::days(1);
    let form = &mut h.shop.form;
    form.set_ordered_by("Merlin the Wise");
    form.set_ready_date(Some(ready));
    form.set_delivery_address("Tower of Magic, Enchanted Forest");
    add_ingredient(&mut h.shop, "Unicorn hair", 1.0, Unit::Pieces, 100.0);
    add_ingredient(&mut h.shop, "Phoenix feather", 2.0, Unit::Pieces, 75.0);
    add_ingredient(&mut h.shop, "Moonwater", 10.0, Unit::Milliliters, 17.5);
}

/// Full flow through form, store and list with one shared store.
#[test]
fn test_valid_draft_becomes_order() {
    let mut h = harness();
    let before = h.shop.store.count();
    fill_merlin(&mut h);
    assert_eq!(h.shop.form.ingredients().total_cost(), 425.0);

    let order = h.shop.form.submit().expect("valid draft should be accepted");

    assert_eq!(order.total_cost, 425.0);
    assert_eq!(order.ordered_by, "Merlin the Wise");
    assert_eq!(order.order_number.as_str(), "POT-2025-0001");
    assert_eq!(order.status, OrderStatus::Brewing);
    assert_eq!(order.order_date, h.clock.now());
    assert_eq!(h.shop.store.count(), before + 1);
    assert_eq!(h.shop.list.count(), before + 1);
    assert_eq!(h.shop.store.get_by_id(&order.id), Some(order.clone()));

    // Draft starts over
    assert_eq!(h.shop.form.draft().ordered_by, "");
    assert_eq!(h.shop.form.draft().order_number.as_str(), "POT-2025-0002");
    assert!(h.shop.form.ingredients().is_empty());

    let note = h.notifier.verify_last(Severity::Success);
    assert_eq!(note.summary, "Potion Created!");
}

#[test]
fn test_missing_customer_name_is_rejected() {
    let mut h = harness();
    fill_merlin(&mut h);
    h.shop.form.set_ordered_by("");

    let err = h.shop.form.submit().expect_err("draft without a name must be rejected");

    assert_eq!(h.shop.store.count(), 0);
    assert_eq!(
        err.errors.get(&OrderField::OrderedBy),
        Some(&vec![ValidationError::Required])
    );
    assert_eq!(
        h.shop.form.error_for(OrderField::OrderedBy).as_deref(),
        Some("Customer name is required")
    );
    // The draft is kept so the user can fix it.
    assert_eq!(h.shop.form.ingredients().len(), 3);
    assert_eq!(h.shop.form.draft().delivery_address, "Tower of Magic, Enchanted Forest");

    let note = h.notifier.verify_last(Severity::Error);
    assert_eq!(note.detail, "Please fill in all required fields correctly.");

    // Fixing the field lets the same draft through.
    h.shop.form.set_ordered_by("Merlin the Wise");
    assert!(h.shop.form.submit().is_ok());
    assert_eq!(h.shop.store.count(), 1);
}

#[test]
fn test_too_few_ingredients_is_rejected() {
    let mut h = harness();
    h.shop.form.set_ordered_by("Morgana");
    h.shop.form.set_delivery_address("Misty Isle of Avalon");
    add_ingredient(&mut h.shop, "Nightshade", 1.0, Unit::Pinch, 5.0);
    add_ingredient(&mut h.shop, "Raven feather", 1.0, Unit::Pieces, 5.0);

    let err = h.shop.form.submit().unwrap_err();
    assert_eq!(
        err.errors.get(&OrderField::Ingredients),
        Some(&vec![ValidationError::MinIngredients { min: 3, actual: 2 }])
    );
    assert_eq!(
        h.shop.form.error_for(OrderField::Ingredients).as_deref(),
        Some("At least 3 ingredients required")
    );
    assert_eq!(h.shop.store.count(), 0);
}

#[test]
fn test_delete_from_list_after_confirmation() {
    let mut h = harness();
    fill_merlin(&mut h);
    let first = h.shop.form.submit().unwrap();
    fill_merlin(&mut h);
    let second = h.shop.form.submit().unwrap();
    assert_eq!(second.order_number.as_str(), "POT-2025-0002");

    let confirmer = ScriptedConfirmer::new().then_answer(false).then_answer(true);
    assert!(!h.shop.list.request_delete(&first, &confirmer));
    assert_eq!(h.shop.store.count(), 2);
    assert!(h.shop.list.request_delete(&first, &confirmer));
    confirmer.verify();

    assert_eq!(h.shop.store.count(), 1);
    assert_eq!(h.shop.list.orders()[0].id, second.id);

    // The next number is derived from the count, so 0002 is issued again.
    assert_eq!(h.shop.store.next_order_number().as_str(), "POT-2025-0002");

    let note = h.notifier.verify_last(Severity::Success);
    assert_eq!(note.summary, "Deleted");
}

#[test]
fn test_store_observers_follow_form_and_list() {
    let mut h = harness();
    let sizes = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&sizes);
    h.shop
        .store
        .subscribe(move |orders| sink.borrow_mut().push(orders.len()));

    fill_merlin(&mut h);
    let order = h.shop.form.submit().unwrap();
    h.shop
        .list
        .request_delete(&order, &ScriptedConfirmer::new().then_answer(true));

    assert_eq!(*sizes.borrow(), vec![1, 0]);
}

#[test]
fn test_new_year_changes_order_number() {
    let mut h = harness();
    fill_merlin(&mut h);
    h.shop.form.submit().unwrap();

    h.clock.advance(Duration::days(14));
    h.shop.form.reset();
    assert_eq!(h.shop.form.draft().order_number.as_str(), "POT-2026-0002");
}
