use super::questions::{Catalog, Category, QuestionKey};

/// Validate a loaded catalog at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_catalog(catalog: &Catalog) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for key in QuestionKey::ALL {
        let Some(expected) = key.category() else {
            // contractTerms: no question definition expected.
            if catalog.question(key).is_some() {
                errors.push(format!(
                    "catalog.questions: '{}' is reserved and must not be defined",
                    key.as_str()
                ));
            }
            continue;
        };

        let count = catalog.questions.iter().filter(|q| q.key == key).count();
        match count {
            0 => errors.push(format!(
                "catalog.questions: missing question '{}'",
                key.as_str()
            )),
            1 => {}
            n => errors.push(format!(
                "catalog.questions: '{}' defined {} times",
                key.as_str(),
                n
            )),
        }

        if let Some(q) = catalog.question(key) {
            if q.category != expected {
                errors.push(format!(
                    "catalog.questions.{}: category must be '{}'",
                    key.as_str(),
                    expected.as_str()
                ));
            }

            let values: Vec<u8> = q.options.iter().map(|o| o.value).collect();
            if values != [1, 2, 3, 4, 5] {
                errors.push(format!(
                    "catalog.questions.{}: options must carry values 1 through 5 in order",
                    key.as_str()
                ));
            }
        }
    }

    for (i, work_type) in catalog.work_types.iter().enumerate() {
        if work_type.trim().is_empty() {
            errors.push(format!("catalog.work_types[{}]: must not be blank", i));
        }
    }
    for (i, location) in catalog.locations.iter().enumerate() {
        if location.trim().is_empty() {
            errors.push(format!("catalog.locations[{}]: must not be blank", i));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
