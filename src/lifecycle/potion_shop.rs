use std::rc::Rc;
use tracing::info;

use crate::clients::{LogNotifier, Notifier};
use crate::config::{ConfigError, ShopConfig};
use crate::form::OrderForm;
use crate::framework::{Clock, SystemClock};
use crate::list::OrderList;
use crate::store::OrderStore;

/// The assembled shop: one store shared by the order form and the order list.
///
/// # Example
///
/// ```ignore
/// let shop = PotionShop::new(ShopConfig::default(), Rc::new(SystemClock), Rc::new(LogNotifier));
/// assert_eq!(shop.store.count(), 0);
/// ```
pub struct PotionShop {
    pub config: ShopConfig,
    pub store: OrderStore,
    pub form: OrderForm,
    pub list: OrderList,
}

impl PotionShop {
    pub fn new(config: ShopConfig, clock: Rc<dyn Clock>, notifier: Rc<dyn Notifier>) -> Self {
        let store = OrderStore::new(config.order_prefix.as_str(), Rc::clone(&clock));
        let form = OrderForm::new(store.clone(), Rc::clone(&notifier), clock, &config);
        let list = OrderList::new(store.clone(), notifier);
        info!(prefix = %config.order_prefix, min_ingredients = config.min_ingredients, "Shop open");
        Self {
            config,
            store,
            form,
            list,
        }
    }

    /// Wall clock, log notifications, configuration from `POTION_SHOP_*` variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let config = ShopConfig::from_env()?;
        Ok(Self::new(config, Rc::new(SystemClock), Rc::new(LogNotifier)))
    }
}

impl std::fmt::Debug for PotionShop {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PotionShop")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
