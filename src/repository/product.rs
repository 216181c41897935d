use diesel::prelude::*;

use crate::domain::product::{NewProduct, Product};
use crate::domain::types::{CategoryId, CategoryName, ProductId};
use crate::models::product::{NewProduct as DbNewProduct, Product as DbProduct};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, ProductReader, ProductWriter};

/// Convert a joined row into a domain product with its resolved category name.
fn into_projection(
    (product, category_name): (DbProduct, Option<String>),
) -> RepositoryResult<(Product, Option<CategoryName>)> {
    let product: Product = product.try_into()?;
    let category_name = category_name.map(CategoryName::new).transpose()?;
    Ok((product, category_name))
}

impl ProductReader for DieselRepository {
    fn list_products(&self) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        products::table
            .left_join(categories::table)
            .select((products::all_columns, categories::name.nullable()))
            .order(products::id.asc())
            .load::<(DbProduct, Option<String>)>(&mut conn)?
            .into_iter()
            .map(into_projection)
            .collect()
    }

    fn get_product_by_id(
        &self,
        id: ProductId,
    ) -> RepositoryResult<Option<(Product, Option<CategoryName>)>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        let row = products::table
            .left_join(categories::table)
            .filter(products::id.eq(id.get()))
            .select((products::all_columns, categories::name.nullable()))
            .first::<(DbProduct, Option<String>)>(&mut conn)
            .optional()?;

        row.map(into_projection).transpose()
    }

    fn list_products_by_category_name(
        &self,
        name: &str,
    ) -> RepositoryResult<Vec<(Product, Option<CategoryName>)>> {
        use crate::schema::{categories, products};

        let mut conn = self.conn()?;

        products::table
            .inner_join(categories::table)
            .filter(categories::name.eq(name))
            .select((products::all_columns, categories::name.nullable()))
            .order(products::id.asc())
            .load::<(DbProduct, Option<String>)>(&mut conn)?
            .into_iter()
            .map(into_projection)
            .collect()
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, product: &NewProduct) -> RepositoryResult<Product> {
        use crate::schema::products;

        let mut conn = self.conn()?;
        let db_product: DbNewProduct = product.clone().into();

        let created = diesel::insert_into(products::table)
            .values(db_product)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.try_into()?)
    }

    fn update_product(&self, id: ProductId, product: &NewProduct) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::update(products::table.filter(products::id.eq(id.get())))
            .set((
                products::name.eq(product.name.as_str()),
                products::price.eq(product.price.get()),
                products::image_url.eq(&product.image_url),
                products::description.eq(&product.description),
                products::category_id.eq(product.category_id.map(CategoryId::get)),
                products::updated_at.eq(diesel::dsl::now),
            ))
            .execute(&mut conn)?;

        Ok(affected)
    }

    fn delete_product(&self, id: ProductId) -> RepositoryResult<usize> {
        use crate::schema::products;

        let mut conn = self.conn()?;

        let affected = diesel::delete(products::table.filter(products::id.eq(id.get())))
            .execute(&mut conn)?;

        Ok(affected)
    }
}
