use crate::model::Rel;
use mason_framework::Document;
use std::fmt;

/// The three resource types the API serves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum ResourceKind {
    #[value(name = "recipes")]
    Recipe,
    #[value(name = "ingredients")]
    Ingredient,
    #[value(name = "drinks")]
    Drink,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Recipe,
        ResourceKind::Ingredient,
        ResourceKind::Drink,
    ];

    /// Entry point of the collection, relative to the API root.
    pub fn collection_href(self) -> &'static str {
        match self {
            ResourceKind::Recipe => "/api/recipes/",
            ResourceKind::Ingredient => "/api/ingredients/",
            ResourceKind::Drink => "/api/drinks/",
        }
    }

    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Recipe => "Recipe",
            ResourceKind::Ingredient => "Ingredient",
            ResourceKind::Drink => "Drink",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            ResourceKind::Recipe => "Recipes",
            ResourceKind::Ingredient => "Ingredients",
            ResourceKind::Drink => "Drinks",
        }
    }

    /// Name of the search field on the collection screen.
    pub fn field(self) -> &'static str {
        match self {
            ResourceKind::Recipe => "recipe",
            ResourceKind::Ingredient => "ingredient",
            ResourceKind::Drink => "drink",
        }
    }

    /// Column headers of the collection table, without the link column.
    pub fn columns(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Recipe => &["Name", "Description"],
            ResourceKind::Ingredient => &["Name", "Unit", "Calories"],
            ResourceKind::Drink => &["Name", "Alcohol"],
        }
    }

    /// Document fields shown in the collection table, in column order.
    pub fn summary_fields(self) -> &'static [&'static str] {
        match self {
            ResourceKind::Recipe => &["name", "description"],
            ResourceKind::Ingredient => &["name", "unit", "calories"],
            ResourceKind::Drink => &["name", "alcohol"],
        }
    }

    /// One table row worth of cells for an item.
    pub fn summary(self, item: &Document) -> Vec<String> {
        self.summary_fields()
            .iter()
            .map(|field| item.text(field))
            .collect()
    }

    /// The collection control that creates a resource of this kind.
    pub fn add_relation(self) -> Rel {
        match self {
            ResourceKind::Recipe => Rel::AddRecipe,
            ResourceKind::Ingredient => Rel::AddIngredient,
            ResourceKind::Drink => Rel::AddDrink,
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.singular())
    }
}
