use super::state::LoadGuard;
use crate::error::Result;
use crate::http_client::InventoryApi;
use crate::lookup::{LookupCache, LookupKind};
use crate::models::{Product, ProductPayload, RecordId};

/// Everything the screen needs before it can render the table.
#[derive(Debug, Clone, PartialEq)]
pub struct InitialData {
    pub products: Vec<Product>,
    pub lookups: LookupCache,
}

/// Network work requested by a reduced action.
#[derive(Debug)]
pub enum Effect {
    None,
    Load(LoadGuard),
    Delete(RecordId),
    Save(ProductPayload),
}

/// Result of an [`Effect`], handed back to `InventoryState::commit`.
#[derive(Debug)]
pub enum Completion {
    Loaded {
        guard: LoadGuard,
        result: Result<InitialData>,
    },
    Deleted {
        id: RecordId,
        result: Result<()>,
    },
    Saved {
        result: Result<Vec<Product>>,
    },
}

/// Products and the three option lists, all requested at once. Any failure
/// fails the whole load.
pub async fn load_initial<A: InventoryApi + ?Sized>(api: &A) -> Result<InitialData> {
    let (products, categories, units, statuses) = futures::try_join!(
        api.list_products(),
        api.load_options(LookupKind::Category),
        api.load_options(LookupKind::Unit),
        api.load_options(LookupKind::Status),
    )?;

    Ok(InitialData {
        products,
        lookups: LookupCache::new(categories, units, statuses),
    })
}

/// Update when the payload carries an id, create otherwise, then refetch the
/// whole list. The server owns the joined reference objects, so the saved row
/// is never merged locally.
pub async fn save_and_refetch<A: InventoryApi + ?Sized>(
    api: &A,
    payload: &ProductPayload,
) -> Result<Vec<Product>> {
    match payload.id {
        Some(id) => api.update_product(id, payload).await?,
        None => api.create_product(payload).await?,
    }
    api.list_products().await
}

pub async fn execute<A: InventoryApi + ?Sized>(api: &A, effect: Effect) -> Option<Completion> {
    let completion = match effect {
        Effect::None => return None,
        Effect::Load(guard) => Completion::Loaded {
            result: load_initial(api).await,
            guard,
        },
        Effect::Delete(id) => Completion::Deleted {
            id,
            result: api.delete_product(id).await,
        },
        Effect::Save(payload) => Completion::Saved {
            result: save_and_refetch(api, &payload).await,
        },
    };
    Some(completion)
}
