//! Reading surface options and light definitions from JS values.
//!
//! Only recognized keys are read; anything else on the objects is ignored.
//! Position and depth fields may be JS functions. When such a function
//! throws, the thrown value is parked in a [`ThrownSlot`] so the JS-facing
//! method can rethrow that exact value instead of a wrapped copy.

use crate::dom::js_error;
use js_sys::{Array, Function, Reflect};
use std::cell::RefCell;
use std::rc::Rc;
use surface_core::{
    CallbackError, Color, Coordinate, LightDef, LightPosition, SurfaceError, SurfaceOptions,
};
use wasm_bindgen::{JsCast, JsValue};

pub type ThrownSlot = Rc<RefCell<Option<JsValue>>>;

/// Convert a core error to the value thrown to JS, preferring the caller's own
/// thrown value for callback failures.
pub fn to_js(err: SurfaceError, thrown: &ThrownSlot) -> JsValue {
    if let SurfaceError::Callback(_) = &err {
        if let Some(original) = thrown.borrow_mut().take() {
            return original;
        }
    }
    js_error(&err.to_string())
}

fn describe(value: &JsValue) -> String {
    if let Some(e) = value.dyn_ref::<js_sys::Error>() {
        return String::from(e.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}

fn caller_failed(thrown: &ThrownSlot, value: JsValue) -> CallbackError {
    let err = CallbackError::new(describe(&value));
    *thrown.borrow_mut() = Some(value);
    err
}

fn numeric(value: JsValue, what: &str) -> Result<f64, CallbackError> {
    value
        .as_f64()
        .ok_or_else(|| CallbackError::new(format!("{what} returned a non-numeric value")))
}

fn get(obj: &JsValue, key: &str) -> Result<Option<JsValue>, JsValue> {
    if obj.is_undefined() || obj.is_null() {
        return Ok(None);
    }
    let v = Reflect::get(obj, &JsValue::from_str(key))?;
    Ok((!v.is_undefined() && !v.is_null()).then_some(v))
}

fn config_error(message: String) -> JsValue {
    js_error(&SurfaceError::Configuration(message).to_string())
}

fn get_f64(obj: &JsValue, key: &str) -> Result<Option<f64>, JsValue> {
    match get(obj, key)? {
        None => Ok(None),
        Some(v) => v
            .as_f64()
            .map(Some)
            .ok_or_else(|| config_error(format!("option {key} must be a number"))),
    }
}

fn get_string(obj: &JsValue, key: &str) -> Result<Option<String>, JsValue> {
    match get(obj, key)? {
        None => Ok(None),
        Some(v) => v
            .as_string()
            .map(Some)
            .ok_or_else(|| config_error(format!("option {key} must be a string"))),
    }
}

pub fn surface_options(obj: &JsValue, thrown: &ThrownSlot) -> Result<SurfaceOptions, JsValue> {
    let depth_transform = match get(obj, "depthTransform")? {
        None => None,
        Some(v) => {
            let f: Function = v
                .dyn_into()
                .map_err(|_| config_error("option depthTransform must be a function".into()))?;
            let thrown = thrown.clone();
            let transform: surface_core::DepthFn = Rc::new(
                move |x: f64, y: f64, depth: f64| -> Result<f64, CallbackError> {
                    let out = f
                        .call3(
                            &JsValue::UNDEFINED,
                            &JsValue::from_f64(x),
                            &JsValue::from_f64(y),
                            &JsValue::from_f64(depth),
                        )
                        .map_err(|e| caller_failed(&thrown, e))?;
                    numeric(out, "depthTransform")
                },
            );
            Some(transform)
        }
    };

    Ok(SurfaceOptions {
        container: get_string(obj, "container")?,
        cellsize: get_f64(obj, "cellsize")?,
        jitter: get_f64(obj, "jitter")?,
        depth: get_f64(obj, "depth")?,
        depth_transform,
        material_ambient: get_string(obj, "materialAmbient")?,
        material_diffuse: get_string(obj, "materialDiffuse")?,
        fill_opacity: get_f64(obj, "fillOpacity")?,
        stroke_opacity: get_f64(obj, "strokeOpacity")?,
        stroke_width: get_f64(obj, "strokeWidth")?,
        render_with: get_string(obj, "renderWith")?,
    })
}

fn coordinate(
    obj: &JsValue,
    key: &str,
    what: &str,
    thrown: &ThrownSlot,
) -> Result<Coordinate, JsValue> {
    let value = get(obj, key)?
        .ok_or_else(|| config_error(format!("{what}.{key} is required")))?;
    if let Some(n) = value.as_f64() {
        return Ok(Coordinate::Literal(n));
    }
    let f: Function = value
        .dyn_into()
        .map_err(|_| config_error(format!("{what}.{key} must be a number or a function")))?;
    let thrown = thrown.clone();
    let label = format!("{what}.{key}");
    Ok(Coordinate::computed(move |w, h| {
        let out = f
            .call2(&JsValue::UNDEFINED, &JsValue::from_f64(w), &JsValue::from_f64(h))
            .map_err(|e| caller_failed(&thrown, e))?;
        numeric(out, &label)
    }))
}

fn position(obj: &JsValue, what: &str, thrown: &ThrownSlot) -> Result<LightPosition, JsValue> {
    Ok(LightPosition {
        x: coordinate(obj, "x", what, thrown)?,
        y: coordinate(obj, "y", what, thrown)?,
        z: coordinate(obj, "z", what, thrown)?,
    })
}

fn color(obj: &JsValue, key: &str, what: &str) -> Result<Color, JsValue> {
    let hex = get_string(obj, key)?
        .ok_or_else(|| config_error(format!("{what}.{key} is required")))?;
    Color::from_hex(&hex).map_err(|e| js_error(&e.to_string()))
}

/// Parse the `lightDefs` array, in order.
pub fn light_defs(value: &JsValue, thrown: &ThrownSlot) -> Result<Vec<LightDef>, JsValue> {
    if value.is_undefined() || value.is_null() {
        return Ok(Vec::new());
    }
    if !Array::is_array(value) {
        return Err(config_error("lightDefs must be an array".into()));
    }
    let array = Array::from(value);
    let mut defs = Vec::with_capacity(array.length() as usize);
    for (i, def) in array.iter().enumerate() {
        let what = format!("lightDefs[{i}]");
        let mut light = LightDef::new(
            color(&def, "ambient", &what)?,
            color(&def, "diffuse", &what)?,
            position(&def, &what, thrown)?,
        );
        if let Some(start) = get(&def, "start")? {
            light = light.with_start(position(&start, &format!("{what}.start"), thrown)?);
        }
        defs.push(light);
    }
    Ok(defs)
}
