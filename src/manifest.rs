//! Builders for the generated dependency manifests.
//!
//! The outputs are plain `package.json` documents, so the structs below
//! serialize with 2-space pretty printing and `IndexMap` dependency tables
//! to keep key order stable across runs.

use crate::errors::ManifestError;
use crate::options::Options;
use indexmap::IndexMap;
use serde::Serialize;

type DependencyMap = IndexMap<&'static str, &'static str>;

#[derive(Debug, Serialize)]
struct PackageJson {
    name: String,
    version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'static str>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    module_type: Option<&'static str>,
    scripts: IndexMap<&'static str, &'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    dependencies: Option<DependencyMap>,
    #[serde(rename = "devDependencies", skip_serializing_if = "Option::is_none")]
    dev_dependencies: Option<DependencyMap>,
}

fn render(file: &'static str, package: &PackageJson) -> Result<String, ManifestError> {
    serde_json::to_string_pretty(package).map_err(|error| ManifestError::new(file, error))
}

pub fn client_package(options: &Options) -> Result<String, ManifestError> {
    let mut dependencies = DependencyMap::from_iter([
        ("react", "^18.2.0"),
        ("react-dom", "^18.2.0"),
        ("react-router-dom", "^6.8.0"),
    ]);
    if options.redux {
        dependencies.insert("redux", "^4.2.1");
        dependencies.insert("react-redux", "^8.0.5");
        dependencies.insert("@reduxjs/toolkit", "^1.9.2");
    }
    if options.socketio {
        dependencies.insert("socket.io-client", "^4.6.0");
    }

    let mut dev_dependencies =
        DependencyMap::from_iter([("vite", "^4.4.0"), ("@vitejs/plugin-react", "^4.0.0")]);
    if options.typescript {
        dev_dependencies.insert("typescript", "^5.0.0");
        dev_dependencies.insert("@types/react", "^18.2.0");
        dev_dependencies.insert("@types/react-dom", "^18.2.0");
    }

    render(
        "client/package.json",
        &PackageJson {
            name: "mern-client".to_string(),
            version: "1.0.0",
            description: None,
            module_type: Some("module"),
            scripts: IndexMap::from_iter([
                ("dev", "vite"),
                ("build", "vite build"),
                ("preview", "vite preview"),
            ]),
            dependencies: Some(dependencies),
            dev_dependencies: Some(dev_dependencies),
        },
    )
}

pub fn server_package(options: &Options) -> Result<String, ManifestError> {
    let mut dependencies = DependencyMap::from_iter([
        ("express", "^4.18.2"),
        ("mongoose", "^6.9.0"),
        ("bcryptjs", "^2.4.3"),
        ("jsonwebtoken", "^9.0.0"),
        ("cors", "^2.8.5"),
        ("helmet", "^6.0.1"),
        ("morgan", "^1.10.0"),
        ("dotenv", "^16.0.3"),
    ]);
    if options.socketio {
        dependencies.insert("socket.io", "^4.6.0");
    }

    render(
        "server/package.json",
        &PackageJson {
            name: "mern-server".to_string(),
            version: "1.0.0",
            description: None,
            module_type: Some("commonjs"),
            scripts: IndexMap::from_iter([
                ("dev", "nodemon src/server.js"),
                ("start", "node src/server.js"),
            ]),
            dependencies: Some(dependencies),
            dev_dependencies: Some(DependencyMap::from_iter([("nodemon", "^2.0.20")])),
        },
    )
}

pub fn root_package(project_name: &str) -> Result<String, ManifestError> {
    render(
        "package.json",
        &PackageJson {
            name: project_name.to_string(),
            version: "1.0.0",
            description: Some("MERN Stack Application"),
            module_type: None,
            scripts: IndexMap::from_iter([
                ("dev:client", "cd client && npm run dev"),
                ("dev:server", "cd server && npm run dev"),
                ("build:client", "cd client && npm run build"),
                ("start:server", "cd server && npm start"),
                ("dev", "concurrently \"npm run dev:server\" \"npm run dev:client\""),
                (
                    "install:all",
                    "npm install && cd client && npm install && cd ../server && npm install",
                ),
            ]),
            dependencies: None,
            dev_dependencies: Some(DependencyMap::from_iter([("concurrently", "^7.6.0")])),
        },
    )
}

#[derive(Debug, Serialize)]
struct WebManifestIcon {
    src: &'static str,
    sizes: &'static str,
    #[serde(rename = "type")]
    icon_type: &'static str,
}

#[derive(Debug, Serialize)]
struct WebManifest {
    short_name: &'static str,
    name: &'static str,
    icons: Vec<WebManifestIcon>,
    start_url: &'static str,
    display: &'static str,
    theme_color: &'static str,
    background_color: &'static str,
}

/// The PWA manifest under `client/public/`.
pub fn web_manifest() -> Result<String, ManifestError> {
    let manifest = WebManifest {
        short_name: "MERN App",
        name: "MERN Stack Application",
        icons: vec![WebManifestIcon {
            src: "favicon.ico",
            sizes: "64x64 32x32 24x24 16x16",
            icon_type: "image/x-icon",
        }],
        start_url: ".",
        display: "standalone",
        theme_color: "#000000",
        background_color: "#ffffff",
    };

    serde_json::to_string_pretty(&manifest)
        .map_err(|error| ManifestError::new("client/public/manifest.json", error))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> serde_json::Value {
        serde_json::from_str(json).expect("manifest is valid JSON")
    }

    #[test]
    fn root_manifest_carries_the_project_name() {
        let value = parse(&root_package("blog").unwrap());

        assert_eq!(value["name"], "blog");
        assert_eq!(value["devDependencies"]["concurrently"], "^7.6.0");
        assert!(value.get("dependencies").is_none());
    }

    #[test]
    fn redux_and_typescript_extend_the_client_manifest() {
        let plain = parse(&client_package(&Options::default()).unwrap());
        assert!(plain["dependencies"].get("@reduxjs/toolkit").is_none());
        assert!(plain["devDependencies"].get("typescript").is_none());

        let full = parse(
            &client_package(&Options {
                typescript: true,
                redux: true,
                ..Options::default()
            })
            .unwrap(),
        );
        assert_eq!(full["dependencies"]["@reduxjs/toolkit"], "^1.9.2");
        assert_eq!(full["devDependencies"]["typescript"], "^5.0.0");
    }

    #[test]
    fn socketio_extends_both_tier_manifests() {
        let options = Options {
            socketio: true,
            ..Options::default()
        };

        let client = parse(&client_package(&options).unwrap());
        assert_eq!(client["dependencies"]["socket.io-client"], "^4.6.0");

        let server = parse(&server_package(&options).unwrap());
        assert_eq!(server["dependencies"]["socket.io"], "^4.6.0");
    }

    #[test]
    fn manifests_are_two_space_indented() {
        let rendered = root_package("blog").unwrap();

        assert!(rendered.starts_with("{\n  \"name\": \"blog\","));
    }
}
