//! Golden digest test for the photo slide
//!
//! The photo layout draws no text, so its output is identical across
//! machines and safe to pin to a digest. Run with `UPDATE_GOLDENS=1` to
//! (re)create the fixture.

use std::fs;
use std::io::Cursor;
use std::path::PathBuf;

use image::{ImageFormat, Rgba, RgbaImage};
use sha2::{Digest, Sha256};
use tiny_http::{Header, Response, Server};
use vitrine::{Property, RendererConfig, SlideRenderer};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode fixture png");
    buf
}

fn start_fixture_server() -> String {
    let server = Server::http("127.0.0.1:0").unwrap();
    let addr = server.server_addr();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let path = request.url().to_string();
            let response = match path.as_str() {
                "/bg.png" => Response::from_data(png_bytes(&RgbaImage::from_pixel(
                    400,
                    200,
                    Rgba([255, 0, 0, 255]),
                )))
                .with_header("Content-Type: image/png".parse::<Header>().unwrap()),
                "/mascaras/02.png" => Response::from_data(png_bytes(&RgbaImage::from_pixel(
                    100,
                    100,
                    Rgba([128, 128, 128, 255]),
                )))
                .with_header("Content-Type: image/png".parse::<Header>().unwrap()),
                _ => Response::from_string("Not Found").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });
    format!("http://{}", addr)
}

#[tokio::test]
async fn golden_photo_slide_digest_matches() {
    let base = start_fixture_server();
    let renderer = SlideRenderer::new(RendererConfig {
        asset_base: base.clone(),
        ..Default::default()
    })
    .expect("renderer");

    let property = Property {
        property_type: "Apartamento".to_string(),
        reference: "REF123".to_string(),
        neighborhood: "Centro".to_string(),
        area: 85.0,
        bedrooms: 3,
        parking_spots: 1,
        suites: 1,
        bathrooms: 2,
        price: "R$ 450.000".to_string(),
    };

    let slide = renderer
        .render(&format!("{}/bg.png", base), 1, &property)
        .await
        .expect("render photo slide");
    let digest = hex::encode(Sha256::digest(&slide.png_data));

    let expected_path = golden_path("photo_slide.digest");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, &digest).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    if !expected_path.exists() {
        println!(
            "No golden at {:?}; run with UPDATE_GOLDENS=1 to create it. Skipping.",
            expected_path
        );
        return;
    }

    let expected = fs::read_to_string(&expected_path).expect("unable to read golden");
    assert_eq!(digest, expected.trim());
}
