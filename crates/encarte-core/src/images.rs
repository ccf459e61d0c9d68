//! Product image candidates.

use crate::error::EncarteError;

/// Looks up candidate image URLs for a product name.
pub trait ImageSearch {
    fn search(&self, query: &str) -> Result<Vec<String>, EncarteError>;
}

const ARROZ: &[&str] = &[
    "https://ayrtonsenna.vtexassets.com/arquivos/ids/156845/arroz-tipo-1-sepe-agroindustrial-5kg.png",
    "https://static.carone.com.br/produtos/arroz-tp1-sepe-5kg-bco_25501_1.png",
];
const FEIJAO: &[&str] = &["https://static.carone.com.br/produtos/feijao-preto-tipiti-1kg_1130_1.png"];
const OLEO: &[&str] = &["https://static.carone.com.br/produtos/oleo-de-soja-vila-velha-900ml_22240_1.png"];
const LEITE: &[&str] = &["https://static.carone.com.br/produtos/leite-uht-int-damare-1l_25301_1.png"];

/// Offline table of pictures for staple groceries.
#[derive(Debug, Clone, Copy, Default)]
pub struct KnownProductImages;

impl KnownProductImages {
    const TABLE: &'static [(&'static [&'static str], &'static [&'static str])] = &[
        (&["arroz", "sepe"], ARROZ),
        (&["feijão", "feijao"], FEIJAO),
        (&["óleo", "oleo"], OLEO),
        (&["leite"], LEITE),
    ];
}

impl ImageSearch for KnownProductImages {
    fn search(&self, query: &str) -> Result<Vec<String>, EncarteError> {
        let lower = query.to_lowercase();
        let mut urls: Vec<String> = Vec::new();
        for (keywords, images) in Self::TABLE {
            if keywords.iter().any(|k| lower.contains(k)) {
                for url in images.iter() {
                    if !urls.iter().any(|u| u == url) {
                        urls.push(url.to_string());
                    }
                }
            }
        }
        Ok(urls)
    }
}

/// Candidate images for a product name. Failures count as no candidates.
pub fn image_candidates(search: &dyn ImageSearch, name: &str) -> Vec<String> {
    let name = name.trim();
    if name.is_empty() {
        return Vec::new();
    }
    match search.search(name) {
        Ok(urls) => urls,
        Err(e) => {
            tracing::warn!(query = %name, error = %e, "image search failed");
            Vec::new()
        }
    }
}
