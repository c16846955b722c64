/// Vertex shader for node boxes
pub const NODE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;
layout(location = 1) in vec3 a_normal;

uniform mat4 u_model;
uniform mat4 u_view;
uniform mat4 u_projection;

out vec3 v_normal;

void main() {
    // Model is translate + uniform scale, so normals need no correction
    v_normal = a_normal;
    gl_Position = u_projection * u_view * u_model * vec4(a_position, 1.0);
}
"#;

/// Fragment shader for node boxes: ambient plus one directional light
pub const NODE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

in vec3 v_normal;

uniform vec3 u_color;
uniform float u_ambient_intensity;
uniform vec3 u_light_dir;
uniform float u_light_intensity;

out vec4 fragColor;

void main() {
    vec3 normal = normalize(v_normal);
    float diffuse = max(dot(normal, u_light_dir), 0.0) * u_light_intensity;
    vec3 color = u_color * (u_ambient_intensity + diffuse);
    fragColor = vec4(min(color, vec3(1.0)), 1.0);
}
"#;

/// Vertex shader for edge lines (positions are already in world space)
pub const LINE_VERTEX_SHADER: &str = r#"#version 300 es
precision highp float;

layout(location = 0) in vec3 a_position;

uniform mat4 u_view;
uniform mat4 u_projection;

void main() {
    gl_Position = u_projection * u_view * vec4(a_position, 1.0);
}
"#;

/// Fragment shader for edge lines: flat, unlit color
pub const LINE_FRAGMENT_SHADER: &str = r#"#version 300 es
precision highp float;

uniform vec3 u_color;

out vec4 fragColor;

void main() {
    fragColor = vec4(u_color, 1.0);
}
"#;
