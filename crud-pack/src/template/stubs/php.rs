//! PHP class stubs

/// `app/Http/Controllers/Concerns/HandlesDeletes.php`
///
/// Always the superset: soft-delete endpoints answer 404 when the model does
/// not use `SoftDeletes`.
pub const HANDLES_DELETES_TRAIT: &str = r#"<?php

namespace App\Http\Controllers\Concerns;

use Illuminate\Database\Eloquent\Model;
use Illuminate\Database\Eloquent\SoftDeletes;
use Illuminate\Http\Request;
use Illuminate\Support\Facades\Gate;

/**
 * Bulk delete and soft-delete endpoints shared by CRUD Pack controllers.
 *
 * The using controller declares:
 *   protected string $modelClass;
 *   protected string $viewFolder;
 *   protected string $routeName;
 *   protected string $policyStyle;
 */
trait HandlesDeletes
{
    public function destroyBulk(Request $request)
    {
        $this->crudAuthorize('deleteBulk', $this->modelClass);

        $models = $this->modelClass::query()->whereKey($this->requestIds($request))->get();
        $models->each(fn (Model $model) => $model->delete());

        $message = $this->usesSoftDeletes()
            ? 'Selected records moved to trash.'
            : 'Selected records permanently deleted.';

        return $this->deletesResponse($request, $message, $models->count(), 'index');
    }

    public function trash(Request $request)
    {
        $this->ensureSoftDeletes();
        $this->crudAuthorize('trash', $this->modelClass);

        $items = $this->modelClass::onlyTrashed()->latest('deleted_at')->paginate(15);

        if ($request->expectsJson()) {
            return response()->json($items);
        }

        return view("{$this->viewFolder}.trash", [
            'items' => $items,
            'trashedTotal' => $items->total(),
            'totalCount' => $this->modelClass::query()->count(),
        ]);
    }

    public function restore(Request $request, $id)
    {
        $this->ensureSoftDeletes();

        $model = $this->modelClass::onlyTrashed()->findOrFail($id);
        $this->crudAuthorize('restore', $model);
        $model->restore();

        return $this->deletesResponse($request, 'Record restored.', 1, 'trash');
    }

    public function restoreBulk(Request $request)
    {
        $this->ensureSoftDeletes();
        $this->crudAuthorize('restoreBulk', $this->modelClass);

        $models = $this->modelClass::onlyTrashed()->whereKey($this->requestIds($request))->get();
        $models->each(fn (Model $model) => $model->restore());

        return $this->deletesResponse($request, 'Selected records restored.', $models->count(), 'trash');
    }

    public function forceDelete(Request $request, $id)
    {
        $this->ensureSoftDeletes();

        $model = $this->modelClass::withTrashed()->findOrFail($id);
        $this->crudAuthorize('forceDelete', $model);
        $model->forceDelete();

        return $this->deletesResponse($request, 'Record permanently deleted.', 1, 'trash');
    }

    public function forceDeleteBulk(Request $request)
    {
        $this->ensureSoftDeletes();
        $this->crudAuthorize('forceDeleteBulk', $this->modelClass);

        $models = $this->modelClass::onlyTrashed()->whereKey($this->requestIds($request))->get();
        $models->each(fn (Model $model) => $model->forceDelete());

        return $this->deletesResponse($request, 'Selected records permanently deleted.', $models->count(), 'trash');
    }

    protected function crudAuthorize(string $ability, mixed $arguments): void
    {
        if (($this->policyStyle ?? 'none') === 'none') {
            return;
        }

        Gate::authorize($ability, $arguments);
    }

    /**
     * Accepts ids as an array or as a comma separated string.
     */
    protected function requestIds(Request $request): array
    {
        $ids = $request->input('ids', []);

        if (is_string($ids)) {
            $ids = explode(',', $ids);
        }

        return array_values(array_filter(array_map('intval', (array) $ids)));
    }

    protected function usesSoftDeletes(): bool
    {
        return in_array(SoftDeletes::class, class_uses_recursive($this->modelClass), true);
    }

    protected function ensureSoftDeletes(): void
    {
        abort_unless($this->usesSoftDeletes(), 404);
    }

    protected function deletesResponse(Request $request, string $message, int $count, string $redirectAction)
    {
        if ($request->expectsJson()) {
            return response()->json(['message' => $message, 'count' => $count]);
        }

        return redirect()
            ->route("{$this->routeName}.{$redirectAction}")
            ->with('success', $message);
    }
}
"#;

/// `app/Http/Controllers/<Model>Controller.php`
pub const WEB_CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers;

use App\Http\Controllers\Concerns\HandlesDeletes;
use App\Models\{{MODEL_CLASS}};
{{REQUEST_IMPORT}}{{AUTH_IMPORT}}
/**
 * {{MODEL_CLASS}} CRUD ({{TABLE}} table).
 */
class {{MODEL_CLASS}}Controller extends Controller
{
    {{CLASS_TRAITS}}

    protected string $modelClass = {{MODEL_CLASS}}::class;
    protected string $viewFolder = '{{VIEW_FOLDER}}';
    protected string $routeName = '{{ROUTE_NAME}}';
    protected string $policyStyle = '{{POLICY_STYLE}}';
{{CONSTRUCTOR}}
    public function index()
    {
{{AUTH_INDEX}}        ${{MODEL_VAR_PLURAL}} = {{MODEL_CLASS}}::query()->latest()->paginate(15);

        return view('{{VIEW_FOLDER}}.index', [
            '{{MODEL_VAR_PLURAL}}' => ${{MODEL_VAR_PLURAL}},
            'totalCount' => ${{MODEL_VAR_PLURAL}}->total(),
        ]);
    }

    public function create()
    {
{{AUTH_CREATE}}        return view('{{VIEW_FOLDER}}.create', [
            '{{MODEL_VAR}}' => new {{MODEL_CLASS}}(),
        ]);
    }

    public function store({{REQUEST_TYPEHINT}} $request)
    {
{{AUTH_STORE}}        ${{MODEL_VAR}} = {{MODEL_CLASS}}::create({{REQUEST_DATA}});

        return redirect()
            ->route('{{ROUTE_NAME}}.show', ${{MODEL_VAR}})
            ->with('success', '{{MODEL_CLASS}} created.');
    }

    public function show({{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_SHOW}}        return view('{{VIEW_FOLDER}}.show', compact('{{MODEL_VAR}}'));
    }

    public function edit({{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_EDIT}}        return view('{{VIEW_FOLDER}}.edit', compact('{{MODEL_VAR}}'));
    }

    public function update({{REQUEST_TYPEHINT}} $request, {{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_UPDATE}}        ${{MODEL_VAR}}->update({{REQUEST_DATA}});

        return redirect()
            ->route('{{ROUTE_NAME}}.show', ${{MODEL_VAR}})
            ->with('success', '{{MODEL_CLASS}} updated.');
    }

    public function destroy({{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_DESTROY}}        ${{MODEL_VAR}}->delete();

        return redirect()
            ->route('{{ROUTE_NAME}}.index')
            ->with('success', '{{MODEL_CLASS}} deleted.');
    }
}
"#;

/// `app/Http/Controllers/Api/<Model>Controller.php`
pub const API_CONTROLLER: &str = r#"<?php

namespace App\Http\Controllers\Api;

use App\Http\Controllers\Concerns\HandlesDeletes;
use App\Http\Controllers\Controller;
use App\Models\{{MODEL_CLASS}};
{{REQUEST_IMPORT}}{{AUTH_IMPORT}}
/**
 * {{MODEL_CLASS}} JSON API ({{TABLE}} table).
 */
class {{MODEL_CLASS}}Controller extends Controller
{
    {{CLASS_TRAITS}}

    protected string $modelClass = {{MODEL_CLASS}}::class;
    protected string $viewFolder = '{{VIEW_FOLDER}}';
    protected string $routeName = 'api.{{ROUTE_NAME}}';
    protected string $policyStyle = '{{POLICY_STYLE}}';
{{CONSTRUCTOR}}
    public function index()
    {
{{AUTH_INDEX}}        ${{MODEL_VAR_PLURAL}} = {{MODEL_CLASS}}::query()->latest()->paginate(15);

        return response()->json(${{MODEL_VAR_PLURAL}});
    }

    public function store({{REQUEST_TYPEHINT}} $request)
    {
{{AUTH_STORE}}        ${{MODEL_VAR}} = {{MODEL_CLASS}}::create({{REQUEST_DATA}});

        return response()->json(${{MODEL_VAR}}, 201);
    }

    public function show({{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_SHOW}}        return response()->json(${{MODEL_VAR}});
    }

    public function update({{REQUEST_TYPEHINT}} $request, {{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_UPDATE}}        ${{MODEL_VAR}}->update({{REQUEST_DATA}});

        return response()->json(${{MODEL_VAR}});
    }

    public function destroy({{MODEL_CLASS}} ${{MODEL_VAR}})
    {
{{AUTH_DESTROY}}        ${{MODEL_VAR}}->delete();

        return response()->json(['message' => '{{MODEL_CLASS}} deleted.']);
    }
}
"#;

/// `app/Http/Requests/<Model>Request.php`
pub const REQUEST: &str = r#"<?php

namespace App\Http\Requests;

use Illuminate\Foundation\Http\FormRequest;

/**
 * Validation shared by store and update.
 */
class {{MODEL_CLASS}}Request extends FormRequest
{
    public function authorize(): bool
    {
        return true;
    }

    public function rules(): array
    {
        // Unique names: Rule::unique('{{TABLE}}', 'name')->ignore($this->route('{{MODEL_VAR}}'))
        return [
            'name' => ['required', 'string', 'max:255'],
        ];
    }
}
"#;

/// `app/Models/<Model>.php`
pub const MODEL: &str = r#"<?php

namespace App\Models;

use Illuminate\Database\Eloquent\Factories\HasFactory;
use Illuminate\Database\Eloquent\Model;
{{SOFT_MODEL_IMPORT}}
class {{MODEL_CLASS}} extends Model
{
    use HasFactory;
{{SOFT_MODEL_USE}}
    protected $fillable = [
        'name',
    ];
}
"#;

/// `database/migrations/<ts>_create_<table>_table.php`
pub const MIGRATION: &str = r#"<?php

use Illuminate\Database\Migrations\Migration;
use Illuminate\Database\Schema\Blueprint;
use Illuminate\Support\Facades\Schema;

return new class extends Migration
{
    public function up(): void
    {
        Schema::create('{{TABLE}}', function (Blueprint $table) {
            $table->id();
            $table->string('name');
            $table->timestamps();
{{SOFT_MIGRATION_COLUMN}}        });
    }

    public function down(): void
    {
        Schema::dropIfExists('{{TABLE}}');
    }
};
"#;

/// `app/Policies/<Model>Policy.php`
pub const POLICY: &str = r#"<?php

namespace App\Policies;

use App\Models\{{MODEL_CLASS}};
use App\Models\User;

class {{MODEL_CLASS}}Policy
{
    public function viewAny(User $user): bool
    {
        return true;
    }

    public function view(User $user, {{MODEL_CLASS}} ${{MODEL_VAR}}): bool
    {
        return true;
    }

    public function create(User $user): bool
    {
        return true;
    }

    public function update(User $user, {{MODEL_CLASS}} ${{MODEL_VAR}}): bool
    {
        return true;
    }

    public function delete(User $user, {{MODEL_CLASS}} ${{MODEL_VAR}}): bool
    {
        return true;
    }

    /**
     * Custom ability for bulk delete.
     */
    public function deleteBulk(User $user): bool
    {
        return true;
    }

{{SOFT_POLICY_METHODS}}}
"#;
