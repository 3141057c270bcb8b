//! Renders the slide variants against a bundled fixture server
//!
//! cargo run --example render_slide

use std::io::Cursor;

use image::{ImageFormat, Rgba, RgbaImage};
use tiny_http::{Header, Response, Server};
use vitrine::{Property, RendererConfig, SlideRenderer};

fn png_bytes(img: &RgbaImage) -> Vec<u8> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), ImageFormat::Png)
        .expect("encode fixture png");
    buf
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    env_logger::init();
    println!("Vitrine - slide renderer demo\n");

    // Serve a deterministic photo and mask set so the demo runs offline
    let server = Server::http("127.0.0.1:0")?;
    let addr = server.server_addr();
    std::thread::spawn(move || {
        for request in server.incoming_requests() {
            let path = request.url().to_string();
            let response = match path.as_str() {
                "/photo.png" => Response::from_data(png_bytes(&RgbaImage::from_pixel(
                    1200,
                    797,
                    Rgba([96, 128, 160, 255]),
                )))
                .with_header("Content-Type: image/png".parse::<Header>().unwrap()),
                "/mascaras/01.png" | "/mascaras/02.png" | "/mascaras/04.png" => {
                    Response::from_data(png_bytes(&RgbaImage::from_pixel(
                        100,
                        100,
                        Rgba([160, 160, 160, 255]),
                    )))
                    .with_header("Content-Type: image/png".parse::<Header>().unwrap())
                }
                _ => Response::from_string("Not Found").with_status_code(404),
            };
            let _ = request.respond(response);
        }
    });

    let base = format!("http://{}", addr);
    let renderer = SlideRenderer::new(RendererConfig {
        asset_base: base.clone(),
        ..Default::default()
    })?;

    // Listing records usually arrive as JSON from the listing service
    let property: Property = serde_json::from_str(
        r#"{
            "type": "Apartamento",
            "reference": "REF123",
            "neighborhood": "Centro",
            "area": 85,
            "bedrooms": 3,
            "parkingSpots": 1,
            "suites": 1,
            "bathrooms": 2,
            "price": "R$ 450.000"
        }"#,
    )?;

    let photo_url = format!("{}/photo.png", base);
    for slide_index in [0usize, 1, 3] {
        match renderer.render(&photo_url, slide_index, &property).await {
            Ok(slide) => {
                let uri = slide.to_data_uri();
                println!(
                    "slide {}: {}x{}, {} PNG bytes\n  {}...",
                    slide_index,
                    slide.width,
                    slide.height,
                    slide.png_data.len(),
                    &uri[..60.min(uri.len())]
                );
            }
            Err(vitrine::Error::FontError(e)) => {
                println!("slide {}: skipped, no usable font ({})", slide_index, e);
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}
