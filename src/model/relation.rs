use mason_framework::LinkRelation;

/// Every control name the admin console understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rel {
    SelfLink,
    Collection,
    Edit,
    Profile,
    Prev,
    Next,
    Ingredients,
    AddRecipe,
    AddIngredient,
    AddDrink,
    AddPairing,
    Delete,
    DeletePairing,
    Drink,
    Recipe,
    Recipes,
    RecipesByIngredient,
    Ingredient,
}

impl LinkRelation for Rel {
    const ALL: &'static [Self] = &[
        Rel::SelfLink,
        Rel::Collection,
        Rel::Edit,
        Rel::Profile,
        Rel::Prev,
        Rel::Next,
        Rel::Ingredients,
        Rel::AddRecipe,
        Rel::AddIngredient,
        Rel::AddDrink,
        Rel::AddPairing,
        Rel::Delete,
        Rel::DeletePairing,
        Rel::Drink,
        Rel::Recipe,
        Rel::Recipes,
        Rel::RecipesByIngredient,
        Rel::Ingredient,
    ];

    fn name(self) -> &'static str {
        match self {
            Rel::SelfLink => "self",
            Rel::Collection => "collection",
            Rel::Edit => "edit",
            Rel::Profile => "profile",
            Rel::Prev => "prev",
            Rel::Next => "next",
            Rel::Ingredients => "bigrec:ingredients",
            Rel::AddRecipe => "bigrec:add-recipe",
            Rel::AddIngredient => "bigrec:add-ingredient",
            Rel::AddDrink => "bigrec:add-drink",
            Rel::AddPairing => "bigrec:add-pairing",
            Rel::Delete => "bigrec:delete",
            Rel::DeletePairing => "bigrec:delete-pairing",
            Rel::Drink => "bigrec:drink",
            Rel::Recipe => "bigrec:recipe",
            Rel::Recipes => "bigrec:recipes",
            Rel::RecipesByIngredient => "bigrec:recipesbying",
            Rel::Ingredient => "bigrec:ingredient",
        }
    }
}
