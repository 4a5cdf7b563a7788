use minijinja::{path_loader, Environment, Error as TemplateError};
use minijinja_autoreload::AutoReloader;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use serde::Serialize;
use actix_web::{http::StatusCode, Error, HttpResponse};
use log::{debug, warn};

use crate::config::CONFIG;
use crate::tags;

pub static TEMPLATES: Lazy<AutoReloader> = Lazy::new(|| {
    AutoReloader::new(|notifier| {
        let env = build_environment(&CONFIG.template_dir);
        if CONFIG.watch_templates {
            notifier.watch_path(CONFIG.template_dir.as_path(), true);
        }
        Ok(env)
    })
});

/// Environment with the map tags registered. Templates come from `template_dir`
/// first; the map fragments fall back to the copies bundled in the crate.
pub fn build_environment(template_dir: &Path) -> Environment<'static> {
    let mut env = Environment::new();
    env.set_loader(fragment_loader(template_dir.to_path_buf()));
    tags::register(&mut env);
    env
}

fn fragment_loader(
    template_dir: PathBuf,
) -> impl Fn(&str) -> Result<Option<String>, TemplateError> + Send + Sync + 'static {
    let from_dir = path_loader(template_dir);
    move |name: &str| match from_dir(name)? {
        Some(source) => Ok(Some(source)),
        None => Ok(tags::bundled_fragment(name).map(str::to_owned)),
    }
}

pub struct TemplateManager {
    templates: HashMap<String, String>,
}

impl TemplateManager {
    pub fn new(template_dir: &Path) -> Self {
        let mut manager = Self {
            templates: HashMap::new(),
        };
        manager.load_templates(template_dir);
        manager
    }

    fn load_templates(&mut self, template_dir: &Path) {
        let entries = match fs::read_dir(template_dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!("Cannot read template dir {}: {}", template_dir.display(), e);
                return;
            }
        };

        for entry in entries.flatten() {
            let path = entry.path();

            if !path.is_file() || path.extension().map_or(true, |ext| ext != "html") {
                continue;
            }
            let (Some(stem), Some(file_name)) = (
                path.file_stem().and_then(|s| s.to_str()),
                path.file_name().and_then(|s| s.to_str()),
            ) else {
                continue;
            };
            self.templates.insert(stem.to_string(), file_name.to_string());
        }
        debug!("Indexed {} page templates in {}", self.templates.len(), template_dir.display());
    }

    pub fn get_template_file(&self, name: &str) -> Option<&String> {
        self.templates.get(name)
    }

    pub fn render_to_string<T: Serialize>(&self, template_name: &str, ctx: T) -> Result<String, Error> {
        let template_file = self.get_template_file(template_name)
            .ok_or_else(|| {
                actix_web::error::ErrorNotFound(format!("Template '{}' not found", template_name))
            })?;

        let env = TEMPLATES
            .acquire_env()
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

        let tmpl = env
            .get_template(template_file)
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))?;

        tmpl.render(ctx)
            .map_err(|e| actix_web::error::ErrorInternalServerError(e.to_string()))
    }

    pub fn render<T: Serialize>(&self, template_name: &str, ctx: T) -> Result<HttpResponse, Error> {
        self.render_with_status(StatusCode::OK, template_name, ctx)
    }

    pub fn render_with_status<T: Serialize>(
        &self,
        status: StatusCode,
        template_name: &str,
        ctx: T,
    ) -> Result<HttpResponse, Error> {
        let html = self.render_to_string(template_name, ctx)?;
        Ok(HttpResponse::build(status)
            .content_type("text/html; charset=utf-8")
            .body(html))
    }
}

pub static TEMPLATE_MANAGER: Lazy<TemplateManager> =
    Lazy::new(|| TemplateManager::new(&CONFIG.template_dir));

pub fn render_template<T: Serialize>(template_name: &str, ctx: T) -> Result<HttpResponse, Error> {
    TEMPLATE_MANAGER.render(template_name, ctx)
}

pub fn render_template_with_status<T: Serialize>(
    status: StatusCode,
    template_name: &str,
    ctx: T,
) -> Result<HttpResponse, Error> {
    TEMPLATE_MANAGER.render_with_status(status, template_name, ctx)
}
