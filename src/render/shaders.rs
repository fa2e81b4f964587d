//! GLSL sources for the point cloud material.

/// Must match `MAX_ITERATIONS` in [`POINT_VERTEX`].
pub const MAX_GPU_ITERATIONS: usize = 2048;

/// Re-runs the map for every vertex. `position.xy` holds the grid point
/// (iteration, step), `texcoord` the quad corner, `normal` the palette
/// texel and the palette flag. `Frame` is `(t, dt, point size px, 0)`.
pub const POINT_VERTEX: &str = r#"#version 100
precision highp float;

attribute vec3 position;
attribute vec2 texcoord;
attribute vec4 color0;
attribute vec4 normal;

varying lowp vec4 v_color;
varying vec2 v_texel;
varying float v_use_palette;

uniform mat4 Ortho;
uniform mat4 Mx;
uniform mat4 My;
uniform vec4 Frame;
uniform vec2 Surface;

const int MAX_ITERATIONS = 2048;

void main() {
    float iteration = position.x;
    float t = Frame.x + Frame.y * position.y;

    vec2 p = vec2(t, t);
    for (int k = 0; k < MAX_ITERATIONS; k++) {
        if (float(k) > iteration) {
            break;
        }
        vec3 squares = vec3(p.x * p.x, p.y * p.y, t * t);
        vec3 products = vec3(p.x * p.y, p.x * t, p.y * t);
        vec3 lin = vec3(p.x, p.y, t);
        p = vec2(
            dot(Mx[0].xyz, squares) + dot(Mx[1].xyz, products) + dot(Mx[2].xyz, lin),
            dot(My[0].xyz, squares) + dot(My[1].xyz, products) + dot(My[2].xyz, lin)
        );
    }

    vec4 clip = Ortho * vec4(p, 0.0, 1.0);
    clip.xy += texcoord * Frame.z / Surface;
    gl_Position = clip;

    v_color = color0;
    v_texel = normal.xy;
    v_use_palette = normal.z;
}
"#;

pub const POINT_FRAGMENT: &str = r#"#version 100
precision mediump float;

varying lowp vec4 v_color;
varying vec2 v_texel;
varying float v_use_palette;

uniform sampler2D Palette;

void main() {
    if (v_use_palette > 0.5) {
        gl_FragColor = texture2D(Palette, v_texel);
    } else {
        gl_FragColor = v_color;
    }
}
"#;
