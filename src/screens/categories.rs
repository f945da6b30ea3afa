use maud::Markup;
use tracing::info;

use crate::api::{AdminApi, ApiError};
use crate::app::App;
use crate::domain::forms::{category_values, parse_category, FormErrors, FormValues, PostedForm};
use crate::domain::Category;
use crate::listview::{ListSchema, SortDirection, SortKey};
use crate::responses::{html_response, html_response_with_status, redirect, ResultResp};
use crate::screens::Screen;
use crate::spreadsheets::ExportColumn;
use crate::templates::pages::categories::{
    category_create, category_detail, category_edit, category_row,
};

pub struct Categories;

impl Screen for Categories {
    type Record = Category;

    const PATH: &'static str = "/categories";
    const TITLE: &'static str = "Categories";

    fn schema(page_size: usize) -> ListSchema<Category> {
        ListSchema::new("categories", "created_at", SortDirection::Descending)
            .page_size(page_size)
            .search(|c: &Category| Some(c.title.as_str()))
            .search(|c: &Category| Some(c.title_es.as_str()))
            .column("title", "Title", |c: &Category| SortKey::text(c.display_title()))
            .column("title_en", "Title (EN)", |c: &Category| SortKey::text(&c.title_en))
            .column("created_at", "Created", |c: &Category| {
                SortKey::opt_date(c.created_at.as_deref())
            })
    }

    fn fetch(api: &dyn AdminApi) -> Result<Vec<Category>, ApiError> {
        api.list_categories()
    }

    fn row(record: &Category) -> Markup {
        category_row(record)
    }

    fn export_columns() -> Vec<ExportColumn<Category>> {
        vec![
            ExportColumn::new("ID", |c: &Category| SortKey::number(c.id as f64)),
            ExportColumn::new("Title (EN)", |c: &Category| SortKey::text(&c.title_en)),
            ExportColumn::new("Title (ES)", |c: &Category| SortKey::text(&c.title_es)),
            ExportColumn::new("Description (EN)", |c: &Category| {
                SortKey::opt_text(c.description_en.as_deref())
            }),
            ExportColumn::new("Description (ES)", |c: &Category| {
                SortKey::opt_text(c.description_es.as_deref())
            }),
            ExportColumn::new("Created", |c: &Category| SortKey::opt_date(c.created_at.as_deref())),
        ]
    }
}

pub fn detail(app: &App, id: i64) -> ResultResp {
    let category = app.api.get_category(id)?;
    html_response(category_detail(&category))
}

pub fn edit_form(app: &App, id: i64) -> ResultResp {
    let category = app.api.get_category(id)?;
    html_response(category_edit(id, &category_values(&category), &FormErrors::default()))
}

pub fn edit_submit(app: &App, id: i64, form: &PostedForm) -> ResultResp {
    match parse_category(form, true) {
        Ok(input) => {
            app.api.update_category(id, &input)?;
            info!(category_id = id, new_image = input.image.is_some(), "category updated");
            redirect(&format!("{}/{id}", Categories::PATH))
        }
        Err(errors) => html_response_with_status(400, category_edit(id, &form.values, &errors)),
    }
}

pub fn create_form() -> ResultResp {
    html_response(category_create(&FormValues::new(), &FormErrors::default()))
}

pub fn create_submit(app: &App, form: &PostedForm) -> ResultResp {
    match parse_category(form, false) {
        Ok(input) => {
            let created = app.api.create_category(&input)?;
            info!(category_id = created.id, "category created");
            redirect(&format!("{}/{}", Categories::PATH, created.id))
        }
        Err(errors) => html_response_with_status(400, category_create(&form.values, &errors)),
    }
}

pub fn delete(app: &App, id: i64) -> ResultResp {
    app.api.delete_category(id)?;
    info!(category_id = id, "category deleted");
    redirect(Categories::PATH)
}
