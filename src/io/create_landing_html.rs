use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Composes the static landing page: heading, the four medical images, and a
/// single link to the map document. `map_link` must match the filename the
/// map renderer writes or the link is dead.
#[must_use]
pub fn build_landing_document(map_link: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>Medical Analysis</title>
    <style>
        body {{
            text-align: center;
            font-family: Arial, sans-serif;
            background-color: #f0f8ff;
            margin: 0;
            padding: 20px;
        }}
        h1 {{
            color: #2c3e50;
            margin-top: 50px;
        }}
        .container {{
            margin: 30px auto;
            display: flex;
            justify-content: center;
            flex-wrap: wrap;
            gap: 20px;
        }}
        img {{
            width: 200px;
            height: auto;
            border-radius: 20px;
            box-shadow: 0 4px 8px rgba(0, 0, 0, 0.2);
        }}
        .link {{
            display: inline-block;
            margin: 30px;
            text-decoration: none;
            color: white;
            background-color: #3498db;
            padding: 15px 25px;
            border-radius: 5px;
            font-size: 18px;
            transition: background-color 0.3s;
        }}
        .link:hover {{
            background-color: #2980b9;
        }}
    </style>
</head>
<body>
    <h1>Medical Analysis</h1>
    <div class="container">
        <img src="images/nursing home.jpg" alt="Nursing Home" title="Nursing Home">
        <img src="images/hospital.jpg" alt="Hospital" title="Hospital">
        <img src="images/disease.png" alt="Disease" title="Disease">
        <img src="images/health.png" alt="Health" title="Health">
    </div>
    <a class="link" href="{map_link}">View Disease Analysis Map</a>
</body>
</html>
"#
    )
}

pub fn write_landing_document(map_link: &str, output_path: &Path) -> Result<()> {
    let html_string = build_landing_document(map_link);

    fs::write(output_path, html_string)
        .with_context(|| format!("failed to write landing page to {}", output_path.display()))?;
    println!("Landing page written to {}", output_path.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_anchor_targets_map_document() {
        let document = build_landing_document("disease_analysis_map.html");
        assert_eq!(document.matches("<a ").count(), 1);
        assert!(document.contains(r#"href="disease_analysis_map.html""#));
    }

    #[test]
    fn test_four_image_references() {
        let document = build_landing_document("disease_analysis_map.html");
        assert_eq!(document.matches("<img ").count(), 4);
        assert!(document.contains(r#"src="images/nursing home.jpg""#));
        assert!(document.contains(r#"src="images/hospital.jpg""#));
        assert!(document.contains(r#"src="images/disease.png""#));
        assert!(document.contains(r#"src="images/health.png""#));
    }

    #[test]
    fn test_document_is_reproducible() {
        assert_eq!(
            build_landing_document("disease_analysis_map.html"),
            build_landing_document("disease_analysis_map.html")
        );
    }

    #[test]
    fn test_write_landing_document() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("index.html");
        write_landing_document("disease_analysis_map.html", &path).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            build_landing_document("disease_analysis_map.html")
        );
    }
}
