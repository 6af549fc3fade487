//! Built-in endpoint definitions for the product directory integration API (v1.3.0).

use super::endpoint::{EndpointDefinition, Method};
use super::field::{FieldSchema, SelectMode};
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";

const API_PREFIX: &str = "/integration-api/v1";

fn additions() -> FieldSchema {
    FieldSchema::key_value("additions", "Additions")
        .describe("Additional properties (key-value pairs)")
}

fn translations() -> FieldSchema {
    FieldSchema::translations("translations", "Translations", Vec::new())
        .describe("English and Albanian translations")
}

fn key_text(key: &str, label: &str, placeholder: &str) -> FieldSchema {
    FieldSchema::text(key, label)
        .required()
        .length(Some(1), 255)
        .placeholder(placeholder)
}

fn link_fields() -> Vec<FieldSchema> {
    vec![
        key_text("type", "Type", "e.g. PDF"),
        key_text("name", "Name", "e.g. Terms and Conditions"),
        FieldSchema::text("url", "URL")
            .required()
            .placeholder("e.g. https://cdn.example.com/doc.pdf"),
        additions(),
        translations(),
    ]
}

fn faq_item_fields() -> Vec<FieldSchema> {
    vec![
        key_text("question", "Question", "Enter question"),
        FieldSchema::text("answer", "Answer")
            .required()
            .length(Some(1), 2000)
            .placeholder("Enter answer")
            .multiline(),
        additions(),
        translations(),
    ]
}

fn description_fields() -> Vec<FieldSchema> {
    vec![
        key_text("type", "Type", "e.g. pricing_section_header"),
        FieldSchema::text("content", "Content")
            .required()
            .length(Some(1), 2000)
            .placeholder("Description content")
            .multiline(),
        additions(),
        translations(),
    ]
}

fn feature_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("name", "Name")
            .required()
            .length(Some(1), 100)
            .placeholder("e.g. Surprise Benefit"),
        FieldSchema::text("description", "Description")
            .length(Some(1), 2000)
            .placeholder("Feature description")
            .multiline(),
        key_text("type", "Type", "e.g. benefit"),
        additions(),
        translations(),
    ]
}

fn category_additional_description_fields() -> Vec<FieldSchema> {
    vec![
        FieldSchema::text("content", "Content")
            .required()
            .length(Some(1), 2000)
            .placeholder("Additional description content")
            .multiline(),
        key_text("type", "Type", "e.g. tagline"),
        translations(),
    ]
}

fn availability_fields(start_required: bool) -> Vec<FieldSchema> {
    let mut start = FieldSchema::datetime("availabilityStartDate", "Availability Start Date")
        .placeholder("2025-06-01T00:00:00Z");
    if start_required {
        start = start.required();
    }
    vec![
        start,
        FieldSchema::datetime("availabilityEndDate", "Availability End Date")
            .placeholder("2025-12-01T23:59:59Z"),
        FieldSchema::number("rank", "Rank").describe("Supports decimals (e.g. 11.05)"),
    ]
}

fn product_key_param() -> FieldSchema {
    key_text("productKey", "Product Key", "e.g. mortgage-2025-05-fixed-term")
}

fn category_key_param() -> FieldSchema {
    key_text("categoryKey", "Category Key", "e.g. cards")
}

fn hierarchy_key_param() -> FieldSchema {
    key_text("hierarchyKey", "Hierarchy Key", "e.g. retail-products")
}

fn endpoint(
    id: &str,
    label: &str,
    method: Method,
    path: &str,
    tag: &str,
    summary: &str,
) -> EndpointDefinition {
    EndpointDefinition {
        id: id.to_string(),
        label: label.to_string(),
        method,
        path: format!("{}{}", API_PREFIX, path),
        tag: tag.to_string(),
        summary: summary.to_string(),
        path_params: Vec::new(),
        query_params: Vec::new(),
        body_fields: Vec::new(),
    }
}

fn create_product() -> EndpointDefinition {
    let mut body = vec![
        key_text("externalProductId", "External Product ID", "e.g. ext-id-001"),
        key_text("productKey", "Product Key", "e.g. mortgage-2025-05-fixed-term"),
        FieldSchema::text("templateKey", "Template Key")
            .length(None, 255)
            .placeholder("e.g. mortgages-fixed-term-view"),
        FieldSchema::text("name", "Product Name")
            .required()
            .length(Some(1), 150)
            .placeholder("e.g. Fixed-Term Mortgage"),
    ];
    body.extend(availability_fields(true));
    body.extend([
        FieldSchema::text("icon", "Icon")
            .length(None, 2000)
            .placeholder("e.g. product-icon-from-design-system"),
        FieldSchema::reference_picker("categories", "Categories", SelectMode::Multiple)
            .required()
            .min_items(1)
            .describe(
                "Select from saved categories (create categories first via Upsert Category)",
            ),
        FieldSchema::record_array(
            "linkGroups",
            "Link Groups",
            "Link Group",
            vec![
                key_text("groupKey", "Group Key", "e.g. documents"),
                FieldSchema::record_array("links", "Links", "Link", link_fields())
                    .required()
                    .min_items(1),
            ],
        )
        .required(),
        FieldSchema::record_array(
            "faqs",
            "FAQs",
            "FAQ Section",
            vec![
                key_text("faqKey", "FAQ Key", "e.g. faq-main-section"),
                FieldSchema::record_array("faqItems", "FAQ Items", "FAQ Item", faq_item_fields())
                    .required()
                    .min_items(1),
            ],
        )
        .required(),
        FieldSchema::record_array(
            "descriptions",
            "Descriptions",
            "Description",
            description_fields(),
        )
        .required(),
        FieldSchema::record_array("features", "Features", "Feature", feature_fields()).required(),
        translations(),
        additions(),
    ]);

    EndpointDefinition {
        body_fields: body,
        ..endpoint(
            "createProduct",
            "Create Product",
            Method::Post,
            "/products",
            "Products",
            "Create a product",
        )
    }
}

fn update_product() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![product_key_param()],
        body_fields: availability_fields(false),
        ..endpoint(
            "updateProduct",
            "Update Product",
            Method::Patch,
            "/products/{productKey}",
            "Products",
            "Update a product",
        )
    }
}

fn get_products() -> EndpointDefinition {
    EndpointDefinition {
        query_params: vec![
            FieldSchema::number("page", "Page")
                .range(Some(0.0), None)
                .default_hint(json!(0))
                .describe("Page number"),
            FieldSchema::number("perPage", "Per Page")
                .range(Some(1.0), Some(1000.0))
                .default_hint(json!(20))
                .describe("Number of items per page"),
        ],
        ..endpoint(
            "getProducts",
            "Get Products",
            Method::Get,
            "/products",
            "Products",
            "Get list of products",
        )
    }
}

fn upsert_category() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![category_key_param()],
        body_fields: vec![
            key_text("externalCategoryId", "External Category ID", "e.g. ext-id-001"),
            FieldSchema::text("name", "Category Name")
                .required()
                .length(Some(1), 50)
                .placeholder("e.g. Accounts"),
            FieldSchema::text("description", "Description")
                .length(Some(1), 500)
                .placeholder("e.g. Flexible, secure, and easy everyday banking."),
            FieldSchema::text("icon", "Icon")
                .length(None, 2000)
                .placeholder("Icon reference or URL"),
            FieldSchema::record_array(
                "additionalDescriptions",
                "Additional Descriptions",
                "Additional Description",
                category_additional_description_fields(),
            )
            .required(),
            translations(),
            additions(),
        ],
        ..endpoint(
            "upsertCategory",
            "Upsert Category",
            Method::Put,
            "/categories/{categoryKey}",
            "Categories",
            "Upsert a category",
        )
    }
}

fn delete_category() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![category_key_param()],
        ..endpoint(
            "deleteCategory",
            "Delete Category",
            Method::Delete,
            "/categories/{categoryKey}",
            "Categories",
            "Delete a category",
        )
    }
}

fn upsert_hierarchy() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![hierarchy_key_param()],
        body_fields: vec![
            FieldSchema::hierarchy("roots", "Root Categories")
                .required()
                .describe("Top-level categories in hierarchy"),
            additions(),
        ],
        ..endpoint(
            "upsertHierarchy",
            "Upsert Hierarchy",
            Method::Put,
            "/categories/hierarchies/{hierarchyKey}",
            "Hierarchies",
            "Upsert a hierarchy",
        )
    }
}

fn delete_hierarchy() -> EndpointDefinition {
    EndpointDefinition {
        path_params: vec![hierarchy_key_param()],
        ..endpoint(
            "deleteHierarchy",
            "Delete Hierarchy",
            Method::Delete,
            "/categories/hierarchies/{hierarchyKey}",
            "Hierarchies",
            "Delete a hierarchy",
        )
    }
}

pub fn endpoints() -> Vec<EndpointDefinition> {
    vec![
        create_product(),
        update_product(),
        get_products(),
        upsert_category(),
        delete_category(),
        upsert_hierarchy(),
        delete_hierarchy(),
    ]
}
