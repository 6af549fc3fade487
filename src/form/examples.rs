//! Static example values, used to pre-fill forms.

use super::FormValues;
use ahash::AHashMap;
use serde_json::{Value, json};

/// Example form values keyed by endpoint id.
#[derive(Debug, Clone, Default)]
pub struct ExampleSet {
    entries: AHashMap<String, FormValues>,
}

impl ExampleSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Examples for the built-in product directory catalog.
    pub fn product_directory() -> Self {
        let mut set = Self::new();
        set.insert("createProduct", create_product());
        set.insert("updateProduct", update_product());
        set.insert("upsertCategory", upsert_category());
        set.insert("upsertHierarchy", upsert_hierarchy());
        set
    }

    pub fn insert(&mut self, endpoint_id: &str, values: FormValues) {
        self.entries.insert(endpoint_id.to_string(), values);
    }

    pub fn get(&self, endpoint_id: &str) -> Option<&FormValues> {
        self.entries.get(endpoint_id)
    }

    pub fn contains(&self, endpoint_id: &str) -> bool {
        self.entries.contains_key(endpoint_id)
    }
}

fn form(path: Value, body: Value) -> FormValues {
    let record = |v: Value| match v {
        Value::Object(map) => map,
        _ => Default::default(),
    };
    FormValues {
        path_values: record(path),
        query_values: Default::default(),
        body_values: record(body),
    }
}

fn sample_translations() -> Value {
    json!({
        "en-US": { "name": "Product", "description": "This is product" },
        "fr-FR": { "name": "Produit", "description": "C'est un produit" }
    })
}

fn sample_additions() -> Value {
    json!({
        "additionalProp1": "string",
        "additionalProp2": "string",
        "additionalProp3": "string"
    })
}

fn create_product() -> FormValues {
    form(
        json!({}),
        json!({
            "externalProductId": "ext-id-001",
            "productKey": "mortgage-2025-05-fixed-term",
            "templateKey": "mortgages-fixed-term-view",
            "name": "Fixed-Term Mortgage",
            "availabilityStartDate": "2025-06-01T00:00:00Z",
            "availabilityEndDate": "2025-12-01T23:59:59Z",
            "rank": 0,
            "icon": "product-icon-from-design-system",
            "categories": ["cards"],
            "linkGroups": [{
                "groupKey": "documents",
                "links": [{
                    "type": "PDF",
                    "name": "Terms and Conditions",
                    "url": "https://cdn.example.com/documents/mortgage-terms-and-conditions.pdf",
                    "additions": sample_additions(),
                    "translations": sample_translations()
                }]
            }],
            "faqs": [{
                "faqKey": "faq-main-section",
                "faqItems": [{
                    "question": "Can I transfer my existing mortgage from another bank?",
                    "answer": "Yes, you can transfer your existing mortgage from another bank to us through a process called a home loan balance transfer. It allows you to move your outstanding loan to our bank, often to enjoy better interest rates, lower EMIs, or improved loan terms.",
                    "additions": sample_additions(),
                    "translations": sample_translations()
                }]
            }],
            "descriptions": [{
                "type": "pricing_section_header",
                "content": "This is the best product.",
                "additions": sample_additions(),
                "translations": sample_translations()
            }],
            "features": [{
                "name": "Surprise Benefit",
                "description": "Surprise benefit when you apply now!",
                "type": "benefit",
                "additions": sample_additions(),
                "translations": sample_translations()
            }],
            "translations": sample_translations(),
            "additions": sample_additions()
        }),
    )
}

fn update_product() -> FormValues {
    form(
        json!({ "productKey": "mortgage-2025-05-fixed-term" }),
        json!({
            "availabilityStartDate": "2025-06-01T00:00:00Z",
            "availabilityEndDate": "2025-12-01T23:59:59Z",
            "rank": 11.05
        }),
    )
}

fn upsert_category() -> FormValues {
    form(
        json!({ "categoryKey": "cards" }),
        json!({
            "externalCategoryId": "ext-id-001",
            "name": "Accounts",
            "description": "Flexible, secure, and easy everyday banking.",
            "icon": "product-icon-from-design-system",
            "additionalDescriptions": [{
                "content": "A mortgage is a long-term loan that helps you turn the keys to your dream home into reality.",
                "type": "tagline",
                "translations": sample_translations()
            }],
            "translations": sample_translations(),
            "additions": sample_additions()
        }),
    )
}

fn upsert_hierarchy() -> FormValues {
    form(
        json!({ "hierarchyKey": "retail-products" }),
        json!({
            "roots": [{
                "category": "cards",
                "subCategories": [
                    { "category": "credit-cards", "subCategories": [] },
                    { "category": "debit-cards", "subCategories": [] }
                ]
            }],
            "additions": { "additionalProp1": "string" }
        }),
    )
}
