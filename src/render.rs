//! Frame rendering. `draw_frame` decides nothing: it reads the session and
//! issues draw calls in a fixed order (sky, stars, city, target, score).

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::background::star_positions;
use crate::error::GameError;
use crate::session::GameSession;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageId {
    Sprite,
    Background,
}

/// Dimensions and availability of the loaded images.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneAssets {
    pub sprite_loaded: bool,
    pub tile_width: f64,
    pub tile_height: f64,
}

/// Minimal 2D drawing surface the renderer needs.
pub trait Surface {
    fn clear(&mut self, width: f64, height: f64);
    fn fill_vertical_gradient(
        &mut self,
        width: f64,
        height: f64,
        top: &str,
        bottom: &str,
    ) -> Result<(), GameError>;
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str);
    fn fill_circle(&mut self, x: f64, y: f64, radius: f64, color: &str)
    -> Result<(), GameError>;
    /// Draw an image at its natural size, or scaled when `size` is given.
    fn draw_image(
        &mut self,
        image: ImageId,
        x: f64,
        y: f64,
        size: Option<(f64, f64)>,
    ) -> Result<(), GameError>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64, font: &str, color: &str)
    -> Result<(), GameError>;
}

pub fn draw_frame<S: Surface + ?Sized>(
    surface: &mut S,
    session: &GameSession,
    assets: &SceneAssets,
) -> Result<(), GameError> {
    let cfg = &session.config;
    let (w, h) = (cfg.canvas_width, cfg.canvas_height);

    surface.clear(w, h);
    surface.fill_vertical_gradient(w, h, &cfg.sky_top, &cfg.sky_bottom)?;
    for (sx, sy) in star_positions(cfg.star_count, w, h) {
        surface.fill_rect(sx, sy, 1.0, 1.0, &cfg.star_color);
    }

    let tiles = session
        .background
        .tile_draws(assets.tile_width, assets.tile_height, h)?;
    for tile in tiles {
        surface.draw_image(ImageId::Background, tile.x, tile.y, None)?;
    }

    let pos = session.target.pos;
    if assets.sprite_loaded {
        let size = cfg.sprite_size;
        surface.draw_image(
            ImageId::Sprite,
            pos.x - size / 2.0,
            pos.y - size / 2.0,
            Some((size, size)),
        )?;
    } else {
        surface.fill_circle(pos.x, pos.y, cfg.fallback_radius, &cfg.fallback_color)?;
    }

    let text = format!("{}{}", cfg.score_label, session.score);
    surface.fill_text(&text, cfg.score_x, cfg.score_y, &cfg.score_font, &cfg.score_color)
}

/// `Surface` over a browser canvas.
pub struct CanvasSurface {
    ctx: CanvasRenderingContext2d,
    sprite: Option<HtmlImageElement>,
    background: HtmlImageElement,
}

impl CanvasSurface {
    pub fn new(
        ctx: CanvasRenderingContext2d,
        sprite: Option<HtmlImageElement>,
        background: HtmlImageElement,
    ) -> Self {
        Self {
            ctx,
            sprite,
            background,
        }
    }

    pub fn scene_assets(&self) -> SceneAssets {
        SceneAssets {
            sprite_loaded: self.sprite.is_some(),
            tile_width: f64::from(self.background.width()),
            tile_height: f64::from(self.background.height()),
        }
    }
}

impl Surface for CanvasSurface {
    fn clear(&mut self, width: f64, height: f64) {
        self.ctx.clear_rect(0.0, 0.0, width, height);
    }

    fn fill_vertical_gradient(
        &mut self,
        width: f64,
        height: f64,
        top: &str,
        bottom: &str,
    ) -> Result<(), GameError> {
        let gradient = self.ctx.create_linear_gradient(0.0, 0.0, 0.0, height);
        gradient.add_color_stop(0.0, top)?;
        gradient.add_color_stop(1.0, bottom)?;
        self.ctx.set_fill_style_canvas_gradient(&gradient);
        self.ctx.fill_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64, color: &str) {
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_rect(x, y, w, h);
    }

    fn fill_circle(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        color: &str,
    ) -> Result<(), GameError> {
        self.ctx.begin_path();
        self.ctx.arc(x, y, radius, 0.0, std::f64::consts::TAU)?;
        self.ctx.set_fill_style_str(color);
        self.ctx.fill();
        self.ctx.close_path();
        Ok(())
    }

    fn draw_image(
        &mut self,
        image: ImageId,
        x: f64,
        y: f64,
        size: Option<(f64, f64)>,
    ) -> Result<(), GameError> {
        let img = match image {
            ImageId::Sprite => match &self.sprite {
                Some(img) => img,
                None => return Ok(()),
            },
            ImageId::Background => &self.background,
        };
        let res: Result<(), JsValue> = match size {
            Some((w, h)) => self
                .ctx
                .draw_image_with_html_image_element_and_dw_and_dh(img, x, y, w, h),
            None => self.ctx.draw_image_with_html_image_element(img, x, y),
        };
        res.map_err(GameError::from)
    }

    fn fill_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        font: &str,
        color: &str,
    ) -> Result<(), GameError> {
        self.ctx.set_font(font);
        self.ctx.set_fill_style_str(color);
        self.ctx.fill_text(text, x, y).map_err(GameError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use glam::DVec2;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Clear,
        Gradient,
        Rect,
        Circle(f64, f64, f64),
        Image(ImageId, f64, f64, Option<(f64, f64)>),
        Text(String),
    }

    #[derive(Default)]
    struct Recorder {
        calls: Vec<Call>,
        // Colour the gradient rejects, like a canvas given an unparsable stop.
        bad_color: Option<&'static str>,
    }

    impl Surface for Recorder {
        fn clear(&mut self, _w: f64, _h: f64) {
            self.calls.push(Call::Clear);
        }
        fn fill_vertical_gradient(
            &mut self,
            _w: f64,
            _h: f64,
            top: &str,
            bottom: &str,
        ) -> Result<(), GameError> {
            if let Some(bad) = self.bad_color.filter(|bad| *bad == top || *bad == bottom) {
                return Err(GameError::Js(format!("bad color stop '{bad}'")));
            }
            self.calls.push(Call::Gradient);
            Ok(())
        }
        fn fill_rect(&mut self, _x: f64, _y: f64, _w: f64, _h: f64, _color: &str) {
            self.calls.push(Call::Rect);
        }
        fn fill_circle(
            &mut self,
            x: f64,
            y: f64,
            r: f64,
            _color: &str,
        ) -> Result<(), GameError> {
            self.calls.push(Call::Circle(x, y, r));
            Ok(())
        }
        fn draw_image(
            &mut self,
            image: ImageId,
            x: f64,
            y: f64,
            size: Option<(f64, f64)>,
        ) -> Result<(), GameError> {
            self.calls.push(Call::Image(image, x, y, size));
            Ok(())
        }
        fn fill_text(
            &mut self,
            text: &str,
            _x: f64,
            _y: f64,
            _font: &str,
            _color: &str,
        ) -> Result<(), GameError> {
            self.calls.push(Call::Text(text.to_string()));
            Ok(())
        }
    }

    fn session() -> GameSession {
        let mut s = GameSession::new(GameConfig::default());
        s.target.pos = DVec2::new(100.0, 200.0);
        s.background.offset = -150.0;
        s.score = 4;
        s
    }

    #[test]
    fn test_draw_order() {
        let mut rec = Recorder::default();
        let assets = SceneAssets {
            sprite_loaded: true,
            tile_width: 100.0,
            tile_height: 50.0,
        };
        draw_frame(&mut rec, &session(), &assets).unwrap();

        assert_eq!(rec.calls[0], Call::Clear);
        assert_eq!(rec.calls[1], Call::Gradient);
        let stars = rec.calls.iter().filter(|c| **c == Call::Rect).count();
        assert_eq!(stars, 50);
        let tail = &rec.calls[rec.calls.len() - 4..];
        assert_eq!(
            tail,
            &[
                Call::Image(ImageId::Background, -50.0, 550.0, None),
                Call::Image(ImageId::Background, 50.0, 550.0, None),
                Call::Image(ImageId::Sprite, 80.0, 180.0, Some((40.0, 40.0))),
                Call::Text("Score: 4".to_string()),
            ]
        );
    }

    #[test]
    fn test_fallback_circle_without_sprite() {
        let mut rec = Recorder::default();
        let assets = SceneAssets {
            sprite_loaded: false,
            tile_width: 100.0,
            tile_height: 50.0,
        };
        draw_frame(&mut rec, &session(), &assets).unwrap();
        assert!(rec.calls.contains(&Call::Circle(100.0, 200.0, 20.0)));
        assert!(
            !rec.calls
                .iter()
                .any(|c| matches!(c, Call::Image(ImageId::Sprite, ..)))
        );
    }

    #[test]
    fn test_unloaded_tile_is_an_error() {
        let mut rec = Recorder::default();
        let assets = SceneAssets {
            sprite_loaded: true,
            tile_width: 0.0,
            tile_height: 0.0,
        };
        let err = draw_frame(&mut rec, &session(), &assets).unwrap_err();
        assert_eq!(err, GameError::InvalidTileWidth(0.0));
    }

    #[test]
    fn test_bad_sky_color_is_reported() {
        let mut rec = Recorder {
            bad_color: Some("not-a-colour"),
            ..Recorder::default()
        };
        let mut s = session();
        s.config.sky_top = "not-a-colour".to_string();
        let assets = SceneAssets {
            sprite_loaded: true,
            tile_width: 100.0,
            tile_height: 50.0,
        };
        let err = draw_frame(&mut rec, &s, &assets).unwrap_err();
        assert!(err.to_string().contains("not-a-colour"));
        assert_eq!(rec.calls, vec![Call::Clear]);
    }
}
