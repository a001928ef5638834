//! Canonical mutation examples, one per registered field

use once_cell::sync::Lazy;
use std::collections::BTreeMap;

const ORDER_CREATE: &str = r"mutation orderCreate($order: OrderCreateOrderInput!, $options: OrderCreateOptionsInput) {
  orderCreate(order: $order, options: $options) {
    userErrors { field message }
    order {
      id
      name
      totalTaxSet { shopMoney { amount currencyCode } }
    }
  }
}";

const DRAFT_ORDER_CREATE: &str = r"mutation draftOrderCreate($input: DraftOrderInput!) {
  draftOrderCreate(input: $input) {
    draftOrder { id name invoiceUrl }
    userErrors { field message }
  }
}";

const PRODUCT_CREATE: &str = r"mutation productCreate($product: ProductCreateInput!, $media: [CreateMediaInput!]) {
  productCreate(product: $product, media: $media) {
    product { id title handle status }
    userErrors { field message }
  }
}";

const PRODUCT_VARIANTS_BULK_UPDATE: &str = r"mutation productVariantsBulkUpdate($productId: ID!, $variants: [ProductVariantsBulkInput!]!) {
  productVariantsBulkUpdate(productId: $productId, variants: $variants) {
    productVariants { id price compareAtPrice }
    userErrors { field message }
  }
}";

const INVENTORY_SET_QUANTITIES: &str = r"mutation inventorySetQuantities($input: InventorySetQuantitiesInput!) {
  inventorySetQuantities(input: $input) {
    inventoryAdjustmentGroup { reason changes { name delta } }
    userErrors { field message }
  }
}";

const FULFILLMENT_CREATE: &str = r"mutation fulfillmentCreate($fulfillment: FulfillmentInput!, $message: String) {
  fulfillmentCreate(fulfillment: $fulfillment, message: $message) {
    fulfillment { id status }
    userErrors { field message }
  }
}";

static CATALOG: Lazy<BTreeMap<&'static str, &'static str>> = Lazy::new(|| {
    BTreeMap::from([
        ("orderCreate", ORDER_CREATE),
        ("draftOrderCreate", DRAFT_ORDER_CREATE),
        ("productCreate", PRODUCT_CREATE),
        ("productVariantsBulkUpdate", PRODUCT_VARIANTS_BULK_UPDATE),
        ("inventorySetQuantities", INVENTORY_SET_QUANTITIES),
        ("fulfillmentCreate", FULFILLMENT_CREATE),
    ])
});

/// Field name -> canonical mutation text
pub fn examples() -> &'static BTreeMap<&'static str, &'static str> {
    &CATALOG
}

pub fn example(field_name: &str) -> Option<&'static str> {
    CATALOG.get(field_name).copied()
}
