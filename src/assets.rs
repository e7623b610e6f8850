//! Image loading. Loads are started together and awaited afterwards so the
//! sprite and the background tile download in parallel.

use js_sys::Promise;
use wasm_bindgen_futures::JsFuture;
use web_sys::HtmlImageElement;

use crate::error::GameError;

/// An image whose download is in flight.
pub struct ImageLoad {
    url: String,
    image: HtmlImageElement,
    done: Promise,
}

impl ImageLoad {
    pub fn start(url: &str) -> Result<Self, GameError> {
        let image = HtmlImageElement::new()?;
        let done = Promise::new(&mut |resolve, reject| {
            image.set_onload(Some(&resolve));
            image.set_onerror(Some(&reject));
        });
        image.set_src(url);
        Ok(Self {
            url: url.to_string(),
            image,
            done,
        })
    }

    pub async fn finish(self) -> Result<HtmlImageElement, GameError> {
        let result = JsFuture::from(self.done).await;
        self.image.set_onload(None);
        self.image.set_onerror(None);
        match result {
            Ok(_) if self.image.width() > 0 => Ok(self.image),
            _ => Err(GameError::AssetLoad { url: self.url }),
        }
    }
}

/// Both game images. The sprite is optional: without it the target is
/// drawn as a plain circle. The background tile is required.
pub struct GameImages {
    pub sprite: Option<HtmlImageElement>,
    pub background: HtmlImageElement,
}

pub async fn load_game_images(
    sprite_url: &str,
    background_url: &str,
) -> Result<GameImages, GameError> {
    let sprite_load = ImageLoad::start(sprite_url)?;
    let background_load = ImageLoad::start(background_url)?;

    let background = background_load.finish().await?;
    let sprite = match sprite_load.finish().await {
        Ok(img) => Some(img),
        Err(err) => {
            console_warn!("{err}; drawing fallback circle");
            None
        }
    };
    Ok(GameImages { sprite, background })
}
