//! Demo run: places one order, shows a rejected draft, then deletes the order.

use potion_shop::clients::AutoConfirm;
use potion_shop::ingredient_set::IngredientChange;
use potion_shop::lifecycle::{setup_tracing, PotionShop};
use potion_shop::list::{format_date, status_icon};
use potion_shop::model::Unit;
use tracing::{error, info, info_span};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_tracing();

    let mut shop = PotionShop::from_env()?;
    info!("Starting potion shop demo");

    let order = {
        let _span = info_span!("order_entry").entered();
        let form = &mut shop.form;
        form.set_ordered_by("Merlin the Wise");
        form.set_delivery_address("Tower of Magic, Enchanted Forest");

        for (name, quantity, unit, price) in [
            ("Unicorn hair", 1.0, Unit::Pieces, 100.0),
            ("Phoenix feather", 2.0, Unit::Pieces, 75.0),
            ("Moonwater", 10.0, Unit::Milliliters, 17.5),
        ] {
            let set = form.ingredients_mut();
            let id = set.add();
            set.update(&id, IngredientChange::Name(name.to_string()));
            set.update(&id, IngredientChange::Unit(Some(unit)));
            set.update(&id, IngredientChange::Quantity(quantity));
            set.update(&id, IngredientChange::PricePerUnit(price));
        }

        form.submit()?
    };

    info!(
        order_number = %order.order_number,
        ready = %format_date(order.ready_date),
        status = %format!("{} {}", status_icon(order.status), order.status),
        total_cost = order.total_cost,
        "Order in the book"
    );

    {
        let _span = info_span!("rejected_entry").entered();
        if let Err(e) = shop.form.submit() {
            error!(error = %e, fields = e.errors.len(), "Draft rejected as expected");
        }
    }

    shop.list.request_delete(&order, &AutoConfirm);
    info!(remaining = shop.list.count(), "Demo complete");
    Ok(())
}
